//! Command-line interface for strictly_solver.

use clap::{Parser, Subcommand};
use strictly_minimax::Algorithm;

/// Strictly Solver - optimal tic-tac-toe moves by minimax search
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Optimal tic-tac-toe moves by minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
///
/// Boards are nine row-major cells: X, O, and `.` for empty, optionally
/// split into rows with `/` (e.g. `XX./OO./...`).
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the best move for the player to move
    Best {
        /// Board to search
        #[arg(short, long)]
        board: String,

        /// Search algorithm (alpha-beta or plain), overrides the config
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the value of every legal move
    Analyze {
        /// Board to analyze
        #[arg(short, long)]
        board: String,

        /// Search algorithm (alpha-beta or plain), overrides the config
        #[arg(short, long)]
        algorithm: Option<Algorithm>,
    },

    /// Play both sides with the search until the game ends
    Play {
        /// Starting board
        #[arg(short, long, default_value = ".../.../...")]
        board: String,

        /// Search algorithm (alpha-beta or plain), overrides the config
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_best_with_algorithm() {
        let cli = Cli::try_parse_from([
            "strictly_solver",
            "best",
            "--board",
            "XX./OO./...",
            "--algorithm",
            "plain",
        ])
        .unwrap();
        match cli.command {
            Command::Best {
                board,
                algorithm,
                json,
            } => {
                assert_eq!(board, "XX./OO./...");
                assert_eq!(algorithm, Some(Algorithm::Plain));
                assert!(!json);
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let parsed = Cli::try_parse_from([
            "strictly_solver",
            "analyze",
            "--board",
            ".........",
            "--algorithm",
            "mcts",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_play_defaults_to_empty_board() {
        let cli = Cli::try_parse_from(["strictly_solver", "--config", "c.toml", "play"]).unwrap();
        assert_eq!(cli.config, Some(std::path::PathBuf::from("c.toml")));
        match cli.command {
            Command::Play { board, .. } => {
                assert_eq!(board.parse::<strictly_minimax::Board>().ok(), Some(Default::default()));
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }
}
