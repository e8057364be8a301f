//! Legal actions and move application.

use crate::invariants::{Invariant, MarkBalanceInvariant};
use crate::{Action, Board, InvalidMoveError, Square};
use std::collections::BTreeSet;
use tracing::{instrument, warn};

use super::turn::player;

/// Returns every empty `(row, col)` on the board.
///
/// The set iterates in row-major order. Search relies on that order for
/// tie-breaking between equally good moves.
pub fn actions(board: &Board) -> BTreeSet<Action> {
    board.open_actions().collect()
}

/// Returns the board that results from the player to move playing `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// - [`InvalidMoveError::OutOfBounds`] if either coordinate exceeds 2.
/// - [`InvalidMoveError::Occupied`] if the square already holds a mark.
#[instrument(skip(board), fields(action = %action))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidMoveError> {
    let Action { row, col } = action;
    let index = action.index().ok_or_else(|| {
        warn!("Rejected out-of-bounds action");
        InvalidMoveError::OutOfBounds { row, col }
    })?;

    if board.squares()[index] != Square::Empty {
        warn!("Rejected move onto occupied square");
        return Err(InvalidMoveError::Occupied { row, col });
    }

    let next = board.with_mark(index, player(board));
    debug_assert!(
        !MarkBalanceInvariant::holds(board) || MarkBalanceInvariant::holds(&next),
        "{}",
        MarkBalanceInvariant::description()
    );
    Ok(next)
}
