//! Hard opponent: exhaustive minimax without pruning.
//!
//! Positions are scored from the computer's side:
//!
//! | terminal board        | score          |
//! |-----------------------|----------------|
//! | computer has a line   | `10 - depth`   |
//! | opponent has a line   | `depth - 10`   |
//! | full, no line         | `0`            |
//!
//! Depth is 0 on the board right after the computer's candidate move and
//! grows by one per ply, so quicker wins and slower losses score higher.
//! Every recursion step works on a fresh `Board` copy.

use super::{NoLegalMoves, Strategy};
use crate::games::tictactoe::{rules, Board, Player, Position};
use tracing::{debug, instrument};

const WIN_SCORE: i32 = 10;

/// Full-depth minimax player.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Creates a minimax strategy.
    pub fn new() -> Self {
        Self
    }

    /// Scores every legal move for `player`, in row-major order.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, player: Player) -> Vec<(Position, i32)> {
        rules::legal_moves(board)
            .into_iter()
            .filter_map(|pos| {
                let next = board.apply(pos, player).ok()?;
                Some((pos, score(&next, player, 0, false)))
            })
            .collect()
    }
}

/// Minimax value of `board` for `ai`. `maximizing` is true when `ai` moves
/// next.
fn score(board: &Board, ai: Player, depth: i32, maximizing: bool) -> i32 {
    match rules::winner(board) {
        Some(player) if player == ai => return WIN_SCORE - depth,
        Some(_) => return depth - WIN_SCORE,
        None if rules::is_full(board) => return 0,
        None => {}
    }

    let mover = if maximizing { ai } else { ai.opponent() };
    let children = Position::ALL
        .iter()
        .filter_map(|&pos| board.apply(pos, mover).ok())
        .map(|next| score(&next, ai, depth + 1, !maximizing));

    // A board that is neither won nor full has at least one child.
    let best = if maximizing {
        children.max()
    } else {
        children.min()
    };
    best.unwrap_or(0)
}

impl Strategy for MinimaxStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Position, NoLegalMoves> {
        let mut best: Option<(Position, i32)> = None;
        for (pos, value) in Self::evaluate(board, player) {
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((pos, value));
            }
        }

        let (pos, value) = best.ok_or(NoLegalMoves)?;
        debug!(position = ?pos, score = value, "Minimax choice");
        Ok(pos)
    }

    fn name(&self) -> &'static str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_move_is_top_left() {
        let mut strategy = MinimaxStrategy::new();
        assert_eq!(
            strategy.select_move(&Board::new(), Player::X),
            Ok(Position::TopLeft)
        );
    }

    #[test]
    fn test_prefers_immediate_win() {
        // O wins now at (1, 2) for a score of 10.
        let board: Board = "XX./OO./X..".parse().unwrap();
        let mut strategy = MinimaxStrategy::new();
        assert_eq!(
            strategy.select_move(&board, Player::O),
            Ok(Position::MiddleRight)
        );
        let scores = MinimaxStrategy::evaluate(&board, Player::O);
        assert!(scores.contains(&(Position::MiddleRight, 10)));
    }

    #[test]
    fn test_blocks_threat() {
        // X threatens the top row; every other reply loses.
        let board: Board = "XX./.O./...".parse().unwrap();
        let mut strategy = MinimaxStrategy::new();
        assert_eq!(strategy.select_move(&board, Player::O), Ok(Position::TopRight));
    }

    #[test]
    fn test_loss_scores_by_depth() {
        // Any O move other than the block lets X win on the next ply.
        let board: Board = "XX./.O./...".parse().unwrap();
        let scores = MinimaxStrategy::evaluate(&board, Player::O);
        assert!(scores.contains(&(Position::BottomRight, -9)));
    }

    #[test]
    fn test_ties_keep_first_move() {
        // Every reply to a center opening draws under perfect play except
        // the edges, which lose; the first corner in scan order wins the tie.
        let board: Board = ".../.X./...".parse().unwrap();
        let mut strategy = MinimaxStrategy::new();
        assert_eq!(strategy.select_move(&board, Player::O), Ok(Position::TopLeft));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(
            MinimaxStrategy::new().select_move(&board, Player::O),
            Err(NoLegalMoves)
        );
    }
}
