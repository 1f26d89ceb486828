//! Tic-tac-toe: board, rules and the game state machine.

mod action;
mod game;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{IllegalMove, MoveError};
pub use game::Game;
pub use phases::{GameOutcome, GameState};
pub use position::Position;
pub use types::{Board, ParseBoardError, Player, Square};
