//! Self-play: both sides follow the search until the game ends.

use derive_getters::Getters;
use derive_more::Display;
use serde::Serialize;
use strictly_minimax::{Action, Board, InvalidMoveError, Player, Searcher, player, result, winner};
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Outcome {
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Player),
    /// The board filled up with no line.
    #[display("draw")]
    Draw,
}

/// One move of a self-play game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ply {
    /// Player who moved.
    pub player: Player,
    /// Square they played.
    pub action: Action,
    /// Board after the move.
    pub board: Board,
}

/// A game played out from a starting board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SelfPlay {
    /// Board the game started from.
    start: Board,
    /// Moves in order.
    plies: Vec<Ply>,
    /// Result on the final board.
    outcome: Outcome,
}

impl SelfPlay {
    /// Final board (the start if no move was played).
    pub fn final_board(&self) -> &Board {
        self.plies.last().map_or(&self.start, |ply| &ply.board)
    }
}

/// Plays `start` to the end, both sides choosing `searcher`'s move.
///
/// # Errors
///
/// Propagates [`InvalidMoveError`] if an action is rejected by the rules.
#[instrument(skip(start, searcher), fields(algorithm = %searcher.algorithm()))]
pub fn play_out(start: Board, searcher: &Searcher) -> Result<SelfPlay, InvalidMoveError> {
    let mut board = start;
    let mut plies = Vec::new();

    while let Some(action) = searcher.best_action(&board) {
        let mover = player(&board);
        board = result(&board, action)?;
        debug!(player = %mover, %action, ply = plies.len() + 1, "Move played");
        plies.push(Ply {
            player: mover,
            action,
            board,
        });
    }

    let outcome = match winner(&board) {
        Some(player) => Outcome::Won(player),
        None => Outcome::Draw,
    };
    info!(%outcome, plies = plies.len(), "Self-play finished");

    Ok(SelfPlay {
        start,
        plies,
        outcome,
    })
}
