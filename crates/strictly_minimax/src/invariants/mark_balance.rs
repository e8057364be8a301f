//! Mark balance invariant: X has as many marks as O, or one more.

use super::Invariant;
use crate::{Board, Player};

/// Invariant: X moves first and players alternate.
///
/// X-count equals O-count or exceeds it by exactly one.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}
