//! Single winner invariant: the game stops at the first line.

use super::Invariant;
use crate::rules::win::has_line;
use crate::{Board, Player};

/// Invariant: X and O never both own a complete line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(has_line(board, Player::X) && has_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_holds() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(SingleWinnerInvariant::holds(&board));
    }

    #[test]
    fn test_two_winners_violate() {
        let board: Board = "XXX/OOO/...".parse().unwrap();
        assert!(!SingleWinnerInvariant::holds(&board));
    }
}
