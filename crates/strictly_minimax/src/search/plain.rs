//! Exhaustive minimax without pruning.
//!
//! Reference search: visits every node of the game tree.

use super::{SCORE_MAX, SCORE_MIN, SearchStats};
use crate::{Board, player, terminal, utility};

pub(super) fn value(board: &Board, maximizer_turn: bool, stats: &mut SearchStats) -> i8 {
    stats.nodes += 1;
    if terminal(board) {
        stats.leaves += 1;
        return utility(board);
    }

    let mark = player(board);
    let start = if maximizer_turn { SCORE_MIN } else { SCORE_MAX };

    board
        .open_actions()
        .filter_map(|action| action.index())
        .map(|index| value(&board.with_mark(index, mark), !maximizer_turn, stats))
        .fold(start, |best, v| {
            if maximizer_turn {
                best.max(v)
            } else {
                best.min(v)
            }
        })
}
