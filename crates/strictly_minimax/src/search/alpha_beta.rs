//! Minimax value with alpha-beta pruning.

use super::{SCORE_MAX, SCORE_MIN, SearchStats};
use crate::{Board, player, terminal, utility};

/// Minimax value of `board` searched inside the window `(alpha, beta)`.
///
/// `maximizer_turn` selects whether this node takes the max or the min of
/// its children; it is true when X is to move. Children carry the mark of
/// [`player`], as [`crate::result`] places it. Values strictly inside the
/// window are exact. A value at or below `alpha` (at or above `beta`) is
/// only an upper (lower) bound and its subtree was cut short.
///
/// Start with `alpha = SCORE_MIN` and `beta = SCORE_MAX` for an exact value.
pub fn minimax_value(board: &Board, maximizer_turn: bool, alpha: i8, beta: i8) -> i8 {
    value(board, maximizer_turn, alpha, beta, &mut SearchStats::default())
}

pub(super) fn value(
    board: &Board,
    maximizer_turn: bool,
    mut alpha: i8,
    mut beta: i8,
    stats: &mut SearchStats,
) -> i8 {
    stats.nodes += 1;
    if terminal(board) {
        stats.leaves += 1;
        return utility(board);
    }

    let mark = player(board);
    let mut open = board.open_actions();

    if maximizer_turn {
        let mut best = SCORE_MIN;
        while let Some(action) = open.next() {
            let Some(index) = action.index() else { continue };
            let child = board.with_mark(index, mark);
            best = best.max(value(&child, false, alpha, beta, stats));
            alpha = alpha.max(best);
            if alpha >= beta {
                if open.next().is_some() {
                    stats.cutoffs += 1;
                }
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_MAX;
        while let Some(action) = open.next() {
            let Some(index) = action.index() else { continue };
            let child = board.with_mark(index, mark);
            best = best.min(value(&child, true, alpha, beta, stats));
            beta = beta.min(best);
            if beta <= alpha {
                if open.next().is_some() {
                    stats.cutoffs += 1;
                }
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initial_state;

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(minimax_value(&initial_state(), true, SCORE_MIN, SCORE_MAX), 0);
    }

    #[test]
    fn test_terminal_returns_utility() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(minimax_value(&board, false, SCORE_MIN, SCORE_MAX), 1);
    }

    #[test]
    fn test_forced_win_for_o() {
        // O to move completes the middle row.
        let board: Board = "XX./OO./X..".parse().unwrap();
        assert_eq!(minimax_value(&board, false, SCORE_MIN, SCORE_MAX), -1);
    }

    #[test]
    fn test_narrow_window_returns_bound() {
        // True value is 1 (X completes the top row); a window with beta = 0
        // fails high with a lower bound at or above beta.
        let board: Board = "XX./OO./...".parse().unwrap();
        assert!(minimax_value(&board, true, SCORE_MIN, 0) >= 0);
    }

    #[test]
    fn test_children_use_player_to_move() {
        // X to move; its last square completes the main diagonal.
        let board: Board = "XOX/OXO/OX.".parse().unwrap();
        assert_eq!(minimax_value(&board, true, SCORE_MIN, SCORE_MAX), 1);
        assert_eq!(minimax_value(&board, false, SCORE_MIN, SCORE_MAX), 1);
    }

    #[test]
    fn test_pruning_cuts_siblings() {
        let mut stats = SearchStats::default();
        let v = value(&initial_state(), true, SCORE_MIN, SCORE_MAX, &mut stats);
        assert_eq!(v, 0);
        assert!(stats.cutoffs > 0);
        assert!(stats.nodes < 549_946);
    }
}
