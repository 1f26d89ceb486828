//! Core domain types for tic-tac-toe.

use super::action::IllegalMove;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
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

    /// Seat number as announced to humans (X is player 1).
    pub fn number(self) -> u8 {
        match self {
            Player::X => 1,
            Player::O => 2,
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

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. The only way to change one is
/// [`Board::apply`], which hands back a new board and leaves the
/// receiver as it was, so lookahead can branch freely on copies.
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

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding a mark.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::Occupied`] if the square already holds a mark.
    pub fn apply(&self, pos: Position, player: Player) -> Result<Board, IllegalMove> {
        if !self.is_empty(pos) {
            return Err(IllegalMove::Occupied(pos));
        }
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(player);
        Ok(next)
    }

    /// Like [`Board::apply`], taking raw zero-based coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfRange`] for coordinates past the edge and
    /// [`IllegalMove::Occupied`] for a taken square.
    #[instrument(skip(self))]
    pub fn apply_at(&self, row: usize, col: usize, player: Player) -> Result<Board, IllegalMove> {
        self.apply(Position::from_row_col(row, col)?, player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with 1-based row and column headers.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  1   2   3 ")?;
        for row in 0..3 {
            let cell = |col: usize| self.squares[row * 3 + col].symbol();
            writeln!(f, "{} {} | {} | {} ", row + 1, cell(0), cell(1), cell(2))?;
            if row < 2 {
                writeln!(f, " ---|---|---")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board literal.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("Unexpected character {:?} in board literal", _0)]
    UnexpectedChar(#[error(not(source))] char),

    /// The literal did not contain exactly nine cells.
    #[display("Board literal has {} cells, expected 9", _0)]
    WrongCellCount(#[error(not(source))] usize),

    /// The mark counts cannot arise from alternating play starting with X.
    #[display("Unreachable mark counts: {} X, {} O", x, o)]
    UnreachableCounts {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a row-major literal such as `"XXX/OO./..."`.
    ///
    /// `X`/`O` are marks; `.`, `_` and `-` are empty squares; whitespace,
    /// `/` and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ParseBoardError::UnexpectedChar(other)),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|cells: Vec<Square>| ParseBoardError::WrongCellCount(cells.len()))?;

        let count = |p: Player| squares.iter().filter(|s| **s == Square::Occupied(p)).count();
        let (x, o) = (count(Player::X), count(Player::O));
        if x != o && x != o + 1 {
            return Err(ParseBoardError::UnreachableCounts { x, o });
        }

        Ok(Self { squares })
    }
}
