//! Terminal test and utility.

use crate::Board;
use crate::Player;

use super::win::winner;

/// Returns true if the game is over: someone has a line or the board is full.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Scores a finished board from X's point of view.
///
/// `1` if X has a line, `-1` if O has one, `0` otherwise. Only meaningful
/// when [`terminal`] holds; a non-terminal board scores `0`.
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{actions, initial_state};

    #[test]
    fn test_empty_board_not_terminal() {
        assert!(!terminal(&initial_state()));
    }

    #[test]
    fn test_full_board_is_terminal() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(terminal(&board));
        assert_eq!(winner(&board), None);
        assert!(actions(&board).is_empty());
        assert_eq!(utility(&board), 0);
    }

    #[test]
    fn test_win_with_open_squares_is_terminal() {
        let board: Board = "OOO/XX./X..".parse().unwrap();
        assert!(terminal(&board));
        assert_eq!(utility(&board), -1);
    }

    #[test]
    fn test_utility_non_terminal_is_zero() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert!(!terminal(&board));
        assert_eq!(utility(&board), 0);
    }
}
