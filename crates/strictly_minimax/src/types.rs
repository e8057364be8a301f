//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (moves first, maximizer).
    X,
    /// Player O (moves second, minimizer).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A move target: 0-indexed `(row, col)`.
///
/// An action is only meaningful relative to a board. Construction does not
/// check bounds; [`crate::result`] rejects out-of-range or occupied targets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Action {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major board index, or `None` when either coordinate is off the board.
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then_some(self.row * 3 + self.col)
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self::new(index / 3, index % 3)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain `Copy` values. Nothing in this crate mutates a board
/// after it is built; moves produce new boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from nested rows, `None` meaning empty.
    pub fn from_rows(rows: [[Option<Player>; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(player) = cell {
                    squares[r * 3 + c] = Square::Occupied(*player);
                }
            }
        }
        Self { squares }
    }

    /// Returns the board as nested rows, `None` meaning empty.
    pub fn rows(&self) -> [[Option<Player>; 3]; 3] {
        let mut rows = [[None; 3]; 3];
        for (i, square) in self.squares.iter().enumerate() {
            if let Square::Occupied(player) = square {
                rows[i / 3][i % 3] = Some(*player);
            }
        }
        rows
    }

    /// Gets the square at `(row, col)`, or `None` if off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        Action::new(row, col).index().map(|i| self.squares[i])
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Empty squares as actions, row-major.
    pub(crate) fn open_actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| Action::from_index(i))
    }

    /// Copy of this board with `player` written at `index`. Caller checks the index.
    pub(crate) fn with_mark(mut self, index: usize, player: Player) -> Self {
        self.squares[index] = Square::Occupied(player);
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                write!(f, "{symbol}")?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {_0:?} in board")]
    UnexpectedChar(#[error(not(source))] char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine row-major cells: `X`/`O` (any case) or `.`, `_`, `-` for
    /// empty. `/`, `|` and whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;
        for ch in s.chars() {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(BoardParseError::UnexpectedChar(c)),
            };
            if count < 9 {
                squares[count] = square;
            }
            count += 1;
        }
        if count != 9 {
            return Err(BoardParseError::WrongCellCount(count));
        }
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_matches_row_major_layout() {
        let board = Board::from_rows([
            [Some(Player::X), None, None],
            [None, Some(Player::O), None],
            [None, None, Some(Player::X)],
        ]);
        assert_eq!(board.get(0, 0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(1, 1), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(2, 2), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(0, 1), Some(Square::Empty));
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.squares()[8], Square::Occupied(Player::X));
    }

    #[test]
    fn test_rows_inverts_from_rows() {
        let rows = [
            [Some(Player::X), Some(Player::O), None],
            [None, None, None],
            [Some(Player::O), None, Some(Player::X)],
        ];
        assert_eq!(Board::from_rows(rows).rows(), rows);
    }

    #[test]
    fn test_parse_accepts_separators_and_case() {
        let board: Board = "xo./...|O-X".parse().unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(board.get(2, 0), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(2, 1), Some(Square::Empty));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(BoardParseError::UnexpectedChar('?'))
        );
        assert_eq!(
            "XO......".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(8))
        );
        assert_eq!(
            "XO........".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(10))
        );
    }

    #[test]
    fn test_display_renders_grid() {
        let board: Board = "X.O/.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "X|.|O\n-+-+-\n.|X|.\n-+-+-\n.|.|O");
    }

    #[test]
    fn test_action_index_bounds() {
        assert_eq!(Action::new(1, 2).index(), Some(5));
        assert_eq!(Action::new(3, 0).index(), None);
        assert_eq!(Action::new(0, 3).index(), None);
        assert_eq!(Action::new(2, 1).to_string(), "(2, 1)");
    }

    #[test]
    fn test_actions_order_row_major() {
        assert!(Action::new(0, 2) < Action::new(1, 0));
        assert!(Action::new(1, 0) < Action::new(1, 1));
    }
}
