//! Easy opponent: uniform choice among legal moves.

use super::{NoLegalMoves, Strategy};
use crate::games::tictactoe::{rules, Board, Player, Position};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Picks uniformly among the empty squares.
///
/// The generator is seeded explicitly, so the same seed replays the same
/// sequence of choices.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Creates a random strategy from `seed`.
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Picks one of `moves` uniformly.
    pub(super) fn choose(&mut self, moves: &[Position]) -> Result<Position, NoLegalMoves> {
        moves.choose(&mut self.rng).copied().ok_or(NoLegalMoves)
    }
}

impl Strategy for RandomStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Position, NoLegalMoves> {
        let choice = self.choose(&rules::legal_moves(board))?;
        debug!(position = ?choice, "Random move");
        Ok(choice)
    }

    fn name(&self) -> &'static str {
        "Random"
    }
}
