//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};

/// Winning lines as row-major indices: rows, then columns, then the main
/// and anti diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first complete line in [`LINES`] order,
/// `None` otherwise.
pub fn winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(player)
        }
        _ => None,
    })
}

/// Returns true if `player` owns at least one complete line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let squares = board.squares();
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| squares[i] == mark))
}
