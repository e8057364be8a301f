//! Text and JSON rendering of search results.

use crate::self_play::SelfPlay;
use serde::Serialize;
use strictly_minimax::{Action, Board, Player, SearchReport, player, terminal};

/// Describes a game value from X's point of view.
pub fn describe_value(value: i8) -> &'static str {
    match value {
        v if v > 0 => "X wins",
        v if v < 0 => "O wins",
        _ => "draw",
    }
}

/// Renders the best move for `board`, or a note that the game is over.
pub fn render_search(board: &Board, report: Option<&SearchReport>) -> String {
    let mut out = format!("{board}\n\n");
    match report {
        Some(report) => {
            out.push_str(&format!(
                "{} to move: play {} ({} with best play)\n",
                player(board),
                report.action,
                describe_value(report.value)
            ));
            out.push_str(&format!("searched {}\n", report.stats));
        }
        None => out.push_str("game over: no move\n"),
    }
    out
}

/// Renders every legal action with its value.
pub fn render_analysis(board: &Board, ranked: &[(Action, i8)]) -> String {
    let mut out = format!("{board}\n\n");
    if terminal(board) {
        out.push_str("game over: no move\n");
        return out;
    }
    out.push_str(&format!("{} to move:\n", player(board)));
    for (action, value) in ranked {
        out.push_str(&format!(
            "  {action}  {:>2}  {}\n",
            value,
            describe_value(*value)
        ));
    }
    out
}

/// Renders a self-play game move by move.
pub fn render_game(game: &SelfPlay) -> String {
    let mut out = format!("{}\n", game.start());
    for (i, ply) in game.plies().iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} plays {}\n{}\n",
            i + 1,
            ply.player,
            ply.action,
            ply.board
        ));
    }
    out.push_str(&format!("\nresult: {}\n", game.outcome()));
    out
}

#[derive(Serialize)]
struct BestMove<'a> {
    board: String,
    to_move: Option<Player>,
    report: Option<&'a SearchReport>,
}

/// JSON form of [`render_search`].
pub fn search_json(board: &Board, report: Option<&SearchReport>) -> serde_json::Result<String> {
    let to_move = (!terminal(board)).then(|| player(board));
    serde_json::to_string_pretty(&BestMove {
        board: board.to_string(),
        to_move,
        report,
    })
}
