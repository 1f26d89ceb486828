//! Board coordinates for tic-tac-toe moves.

use super::action::IllegalMove;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board.
///
/// Variants are declared in row-major order, so iterating them (or
/// [`Position::ALL`]) visits row 0 left-to-right, then row 1, then row 2.
/// A `Position` is always in range; raw `(row, col)` pairs enter through
/// [`Position::from_row_col`].
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
    strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from zero-based row and column.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfRange`] if either coordinate exceeds 2.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, IllegalMove> {
        if row >= 3 || col >= 3 {
            return Err(IllegalMove::OutOfRange { row, col });
        }
        Ok(Self::ALL[row * 3 + col])
    }

    /// Returns the empty positions of `board` in row-major order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (row {}, column {})",
            self.label(),
            self.row() + 1,
            self.col() + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_iteration_is_row_major() {
        let iterated: Vec<Position> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL.to_vec());
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(pos.row() * 3 + pos.col(), index);
        }
    }

    #[test]
    fn test_from_row_col() {
        assert_eq!(Position::from_row_col(0, 0), Ok(Position::TopLeft));
        assert_eq!(Position::from_row_col(1, 1), Ok(Position::Center));
        assert_eq!(Position::from_row_col(2, 1), Ok(Position::BottomCenter));
    }

    #[test]
    fn test_from_row_col_out_of_range() {
        assert_eq!(
            Position::from_row_col(3, 0),
            Err(IllegalMove::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            Position::from_row_col(0, 7),
            Err(IllegalMove::OutOfRange { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_display_uses_one_based_coordinates() {
        assert_eq!(
            Position::MiddleRight.to_string(),
            "Middle-right (row 2, column 3)"
        );
    }
}
