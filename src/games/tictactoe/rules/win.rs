//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight lines: rows, then columns, then the main diagonal, then the
/// anti-diagonal.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first line fully occupied by one player,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(player)
        }
        _ => None,
    })
}
