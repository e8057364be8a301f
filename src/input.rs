//! Board text input.

use crate::error::SolverError;
use strictly_minimax::Board;
use strictly_minimax::invariants::{InvariantSet, WellFormed};
use tracing::{instrument, warn};

/// Parses a board and checks that legal play could have produced it.
///
/// See [`Board`]'s `FromStr` impl for the accepted text format.
#[instrument]
pub fn parse_board(text: &str) -> Result<Board, SolverError> {
    let board: Board = text.parse()?;
    WellFormed::check_all(&board).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Rejected malformed board");
        SolverError::Malformed(descriptions)
    })?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_minimax::{BoardParseError, Player};

    #[test]
    fn test_parse_valid_board() {
        let board = parse_board("XX./OO./...").unwrap();
        assert_eq!(board.count(Player::X), 2);
    }

    #[test]
    fn test_parse_error_propagates() {
        assert_eq!(
            parse_board("XX"),
            Err(SolverError::Parse(BoardParseError::WrongCellCount(2)))
        );
    }

    #[test]
    fn test_unbalanced_board_rejected() {
        let err = parse_board("OO./.../...").unwrap_err();
        assert!(matches!(err, SolverError::Malformed(_)));
        assert!(err.to_string().contains("exactly one more"));
    }
}
