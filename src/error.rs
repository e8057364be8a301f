//! Front-end error types.

use crate::config::ConfigError;
use derive_more::{Display, Error};
use strictly_minimax::BoardParseError;

/// Anything that stops the solver from producing an answer.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// The board text could not be read.
    #[display("Invalid board: {_0}")]
    Parse(BoardParseError),

    /// The board parsed but cannot arise from legal play.
    #[display("Board cannot arise from legal play: {_0}")]
    Malformed(#[error(not(source))] String),

    /// The configuration could not be loaded.
    #[display("{_0}")]
    Config(ConfigError),
}

impl From<BoardParseError> for SolverError {
    fn from(err: BoardParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<ConfigError> for SolverError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
