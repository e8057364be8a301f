//! Starting position and turn order.

use crate::{Board, Mark, Player};

/// Returns the starting board: every square empty.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next on `board`.
///
/// X moves first and players alternate, so X is to move whenever both
/// players have placed the same number of marks.
pub fn player(board: &Board) -> Mark {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Square, result};

    #[test]
    fn test_initial_state_is_empty() {
        let board = initial_state();
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(player(&board), Player::X);
    }

    #[test]
    fn test_player_alternates() {
        let mut board = initial_state();
        let mut expected = Player::X;
        for index in [4, 0, 8, 2, 6, 3] {
            assert_eq!(player(&board), expected);
            board = result(&board, Action::new(index / 3, index % 3)).unwrap();
            expected = expected.opponent();
        }
        assert_eq!(player(&board), expected);
    }
}
