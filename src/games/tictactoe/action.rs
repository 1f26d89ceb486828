//! Move errors for tic-tac-toe.
//!
//! A move is a [`Position`] played by the side to move. These errors
//! describe why a move was refused; none of them alter the board.

use super::Position;

/// A move that can never be played on the current board.
///
/// Recovered locally: the caller asks the human for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMove {
    /// Row or column outside 0..=2.
    #[display("Position (row {}, column {}) is off the board", row, col)]
    OutOfRange {
        /// Zero-based row that was requested.
        row: usize,
        /// Zero-based column that was requested.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}

/// Error returned when a move is submitted to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The move itself is not legal on this board.
    #[display("Illegal move: {}", _0)]
    Illegal(IllegalMove),

    /// The game already reached a terminal state.
    #[display("Game is already over")]
    GameOver,
}

impl From<IllegalMove> for MoveError {
    fn from(illegal: IllegalMove) -> Self {
        MoveError::Illegal(illegal)
    }
}
