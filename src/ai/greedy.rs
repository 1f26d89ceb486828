//! Medium opponent: take an immediate win, otherwise play at random.
//!
//! Known weakness: this strategy never blocks. If the opponent threatens
//! to complete a line and no winning move exists, the fallback is a
//! uniform pick over every legal move, so the threat is answered only by
//! chance.

use super::{NoLegalMoves, RandomStrategy, Strategy};
use crate::games::tictactoe::{rules, Board, Player, Position};
use tracing::{debug, instrument};

/// One-ply lookahead for its own win, random fallback.
#[derive(Debug, Clone)]
pub struct GreedyStrategy {
    fallback: RandomStrategy,
}

impl GreedyStrategy {
    /// Creates a greedy strategy whose random fallback is seeded with `seed`.
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            fallback: RandomStrategy::new(seed),
        }
    }

    /// First move in row-major order that wins on the spot for `player`.
    pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
        rules::legal_moves(board).into_iter().find(|&pos| {
            board
                .apply(pos, player)
                .is_ok_and(|next| rules::winner(&next) == Some(player))
        })
    }
}

impl Strategy for GreedyStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Position, NoLegalMoves> {
        let moves = rules::legal_moves(board);
        if moves.is_empty() {
            return Err(NoLegalMoves);
        }

        if let Some(pos) = Self::winning_move(board, player) {
            debug!(position = ?pos, "Taking winning move");
            return Ok(pos);
        }

        let pos = self.fallback.choose(&moves)?;
        debug!(position = ?pos, "No winning move, random fallback");
        Ok(pos)
    }

    fn name(&self) -> &'static str {
        "Greedy"
    }
}
