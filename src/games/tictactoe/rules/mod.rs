//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the game loop and the computer strategies share them.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::is_full;
pub use moves::legal_moves;
pub use win::winner;

use super::{Board, GameOutcome};
use tracing::instrument;

/// Classifies `board` as won, drawn, or still in progress.
///
/// A completed line takes precedence over a full board.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(player) = winner(board) {
        GameOutcome::Win(player)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::Player;
    use super::*;

    #[test]
    fn test_top_row_win() {
        let board: Board = "XXX/OO_/___".parse().unwrap();
        assert_eq!(outcome(&board), GameOutcome::Win(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(outcome(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board: Board = "XOX/OXO/XOX".parse().unwrap();
        assert_eq!(outcome(&board), GameOutcome::Win(Player::X));
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(outcome(&Board::new()), GameOutcome::InProgress);
    }
}
