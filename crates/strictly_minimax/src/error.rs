//! Move errors.

use derive_more::{Display, Error};

/// Error returned by [`crate::result`] when an action cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMoveError {
    /// The targeted square already holds a mark.
    #[display("Square ({row}, {col}) is already occupied")]
    Occupied {
        /// Row of the rejected action.
        row: usize,
        /// Column of the rejected action.
        col: usize,
    },

    /// A coordinate lies outside `0..=2`.
    #[display("Position ({row}, {col}) is out of bounds (must be 0-2)")]
    OutOfBounds {
        /// Row of the rejected action.
        row: usize,
        /// Column of the rejected action.
        col: usize,
    },
}
