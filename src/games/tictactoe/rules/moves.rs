//! Legal move enumeration.

use super::super::{Board, Position};
use tracing::instrument;

/// All empty positions in row-major order.
///
/// The order is load-bearing: computer strategies break ties by taking
/// the first candidate this returns.
#[instrument(level = "trace")]
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_all_moves() {
        assert_eq!(legal_moves(&Board::new()), Position::ALL.to_vec());
    }

    #[test]
    fn test_filters_occupied_in_row_major_order() {
        let board: Board = "X../.O./..X".parse().unwrap();
        assert_eq!(
            legal_moves(&board),
            vec![
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomCenter,
            ]
        );
    }

    #[test]
    fn test_full_board_no_moves() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(legal_moves(&board).is_empty());
    }
}
