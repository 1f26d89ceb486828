//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Who sits in the O seat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Human X against a computer O.
    #[default]
    PlayerVsComputer,
    /// Two humans sharing the console.
    PlayerVsPlayer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::PlayerVsComputer => "Player vs Computer",
            GameMode::PlayerVsPlayer => "Player vs Player",
        }
    }
}
