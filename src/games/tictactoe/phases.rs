//! Game outcome and loop states for tic-tac-toe.

use super::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line completed and empty squares remain.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// The board is full with no completed line.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// Returns true once the game can accept no further moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "Player {} wins", player),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the game loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the given player to move.
    AwaitingMove(Player),
    /// Terminal. Holds a `Win` or `Draw` outcome; no transition leaves it.
    Finished(GameOutcome),
}

impl GameState {
    /// Player to move, if the game is still running.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            GameState::AwaitingMove(player) => Some(*player),
            GameState::Finished(_) => None,
        }
    }

    /// Returns true in the `Finished` state.
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Finished(_))
    }
}
