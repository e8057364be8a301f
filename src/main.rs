//! Strictly Solver - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_solver::{
    SolverConfig, parse_board, play_out, render_analysis, render_game, render_search, search_json,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SolverConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Best {
            board,
            algorithm,
            json,
        } => {
            let board = parse_board(&board)?;
            let searcher = config.with_algorithm(algorithm).searcher();
            info!(algorithm = %searcher.algorithm(), "Searching for best move");
            let report = searcher.search(&board);
            if json {
                println!("{}", search_json(&board, report.as_ref())?);
            } else {
                print!("{}", render_search(&board, report.as_ref()));
            }
        }
        Command::Analyze { board, algorithm } => {
            let board = parse_board(&board)?;
            let searcher = config.with_algorithm(algorithm).searcher();
            info!(algorithm = %searcher.algorithm(), "Ranking moves");
            print!("{}", render_analysis(&board, &searcher.rank_actions(&board)));
        }
        Command::Play {
            board,
            algorithm,
            json,
        } => {
            let board = parse_board(&board)?;
            let searcher = config.with_algorithm(algorithm).searcher();
            let game = play_out(board, &searcher)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&game)?);
            } else {
                print!("{}", render_game(&game));
            }
        }
    }

    Ok(())
}
