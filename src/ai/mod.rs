//! Computer opponents.
//!
//! Every opponent implements [`Strategy`]: given a board and the mark it
//! plays, pick a move. Strategies only read the live board; lookahead
//! runs on copies.

mod difficulty;
mod greedy;
mod minimax;
mod random;

pub use difficulty::Difficulty;
pub use greedy::GreedyStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use crate::games::tictactoe::{Board, Player, Position};

/// A strategy was asked to move on a board with no empty square.
///
/// The game loop only asks while the game is in progress, so seeing this
/// means a caller broke that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("No legal moves on the board")]
pub struct NoLegalMoves;

/// Move-selection policy for a computer player.
pub trait Strategy: std::fmt::Debug {
    /// Chooses a move for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMoves`] if the board is full.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Position, NoLegalMoves>;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;
}
