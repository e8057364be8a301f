//! Pure tic-tac-toe game logic and optimal-move search.
//!
//! Boards are immutable `Copy` values. The rule functions ([`player`],
//! [`actions`], [`result`], [`winner`], [`terminal`], [`utility`]) describe
//! the game; [`minimax`] picks the optimal move for the player to move,
//! assuming both sides play perfectly from there on.
//!
//! ```
//! use strictly_minimax::{initial_state, minimax, result, terminal};
//!
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = result(&board, action)?;
//! }
//! assert!(terminal(&board));
//! # Ok::<(), strictly_minimax::InvalidMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
pub mod rules;
pub mod search;
mod types;

pub use error::InvalidMoveError;
pub use rules::{actions, initial_state, player, result, terminal, utility, winner};
pub use search::{
    Algorithm, SCORE_MAX, SCORE_MIN, SearchReport, SearchStats, Searcher, minimax,
    minimax_value,
};
pub use types::{Action, Board, BoardParseError, Player, Square};

/// Alias for clarity: the mark a player places is the player itself.
pub type Mark = Player;
