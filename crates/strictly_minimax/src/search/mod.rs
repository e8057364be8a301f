//! Game-tree search.
//!
//! X maximizes [`utility`](crate::utility), O minimizes it. The search is a
//! plain depth-first recursion over [`Board`] values; it keeps no state
//! between calls, so a [`Searcher`] can be shared freely across threads.
//!
//! Moves are explored in row-major order. When several moves share the best
//! value, the first one in that order is chosen, and both algorithms choose
//! the same one.

mod alpha_beta;
mod plain;
mod stats;

pub use alpha_beta::minimax_value;
pub use stats::SearchStats;

use crate::{Action, Board, Player, player, terminal, utility};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Lower search bound, below every utility.
pub const SCORE_MIN: i8 = -2;

/// Upper search bound, above every utility.
pub const SCORE_MAX: i8 = 2;

/// Search algorithm.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Algorithm {
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
    /// Exhaustive minimax.
    Plain,
}

/// Outcome of searching a non-terminal board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Best action for the player to move.
    pub action: Action,
    /// Game value after `action`, from X's point of view.
    pub value: i8,
    /// Work done by the search.
    pub stats: SearchStats,
}

/// Configured minimax search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Searcher {
    algorithm: Algorithm,
}

impl Searcher {
    /// Creates a searcher using `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Returns the configured algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the best action for the player to move, `None` if the game is over.
    pub fn best_action(&self, board: &Board) -> Option<Action> {
        self.search(board).map(|report| report.action)
    }

    /// Searches `board` and reports the chosen action, its value and stats.
    ///
    /// Returns `None` on terminal boards.
    #[instrument(skip(self, board), fields(algorithm = %self.algorithm))]
    pub fn search(&self, board: &Board) -> Option<SearchReport> {
        if terminal(board) {
            debug!("Board is terminal, no move to search");
            return None;
        }

        let mover = player(board);
        let maximizing = mover == Player::X;
        let mut stats = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };
        let mut alpha = SCORE_MIN;
        let mut beta = SCORE_MAX;
        let mut best: Option<(Action, i8)> = None;

        for action in board.open_actions() {
            let Some(index) = action.index() else { continue };
            let child = board.with_mark(index, mover);
            let value = match self.algorithm {
                Algorithm::AlphaBeta => {
                    alpha_beta::value(&child, !maximizing, alpha, beta, &mut stats)
                }
                Algorithm::Plain => plain::value(&child, !maximizing, &mut stats),
            };

            let improves = match best {
                None => true,
                Some((_, current)) if maximizing => value > current,
                Some((_, current)) => value < current,
            };
            if improves {
                best = Some((action, value));
                if maximizing {
                    alpha = alpha.max(value);
                } else {
                    beta = beta.min(value);
                }
            }
        }

        let (action, value) = best?;
        debug!(player = %mover, %action, value, %stats, "Search complete");
        Some(SearchReport {
            action,
            value,
            stats,
        })
    }

    /// Exact minimax value of any board, from X's point of view.
    pub fn value(&self, board: &Board) -> i8 {
        if terminal(board) {
            return utility(board);
        }
        let maximizing = player(board) == Player::X;
        let mut stats = SearchStats::default();
        match self.algorithm {
            Algorithm::AlphaBeta => {
                alpha_beta::value(board, maximizing, SCORE_MIN, SCORE_MAX, &mut stats)
            }
            Algorithm::Plain => plain::value(board, maximizing, &mut stats),
        }
    }

    /// Exact value of every legal action, in row-major order.
    #[instrument(skip(self, board), fields(algorithm = %self.algorithm))]
    pub fn rank_actions(&self, board: &Board) -> Vec<(Action, i8)> {
        if terminal(board) {
            return Vec::new();
        }
        let mover = player(board);
        board
            .open_actions()
            .filter_map(|action| {
                let index = action.index()?;
                Some((action, self.value(&board.with_mark(index, mover))))
            })
            .collect()
    }
}

/// Returns the optimal action for the player to move on `board`.
///
/// Uses alpha-beta pruning. Returns `None` if the game is already over.
pub fn minimax(board: &Board) -> Option<Action> {
    Searcher::default().best_action(board)
}
