//! Strictly Solver library - front end for the minimax tic-tac-toe engine
//!
//! The game rules and search live in [`strictly_minimax`]; this crate adds
//! what a command-line caller needs around them.
//!
//! # Architecture
//!
//! - **Config**: TOML solver settings (algorithm, log filter)
//! - **Input**: board text parsing with well-formedness checks
//! - **Self-play**: drives a game to the end with the search on both sides
//! - **Report**: text and JSON rendering of results
//!
//! # Example
//!
//! ```
//! use strictly_solver::{Outcome, SolverConfig, parse_board, play_out};
//!
//! # fn example() -> anyhow::Result<()> {
//! let board = parse_board("XX./OO./...")?;
//! let game = play_out(board, &SolverConfig::default().searcher())?;
//! assert_eq!(game.outcome(), &Outcome::Won(strictly_minimax::Player::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod input;
mod report;
mod self_play;

pub use config::{ConfigError, SolverConfig};
pub use error::SolverError;
pub use input::parse_board;
pub use report::{describe_value, render_analysis, render_game, render_search, search_json};
pub use self_play::{Outcome, Ply, SelfPlay, play_out};
