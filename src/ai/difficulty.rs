//! Opponent strength selection.

use super::{GreedyStrategy, MinimaxStrategy, RandomStrategy, Strategy};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// How strong the computer opponent plays.
///
/// Chosen once before a game starts. Numeric choices follow the menu
/// (1 = Easy, 2 = Medium, 3 = Hard); anything else selects Easy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(from = "i64", into = "i64")]
pub enum Difficulty {
    /// Uniformly random moves.
    #[default]
    Easy,
    /// Immediate wins, random otherwise.
    Medium,
    /// Full minimax search.
    Hard,
}

impl Difficulty {
    /// Maps a menu choice to a difficulty, falling back to Easy.
    #[instrument]
    pub fn from_choice(choice: i64) -> Self {
        match choice {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            3 => Difficulty::Hard,
            other => {
                warn!(choice = other, "Invalid difficulty, using Easy");
                Difficulty::Easy
            }
        }
    }

    /// Returns true if `choice` names a difficulty.
    pub fn is_valid_choice(choice: i64) -> bool {
        (1..=3).contains(&choice)
    }

    /// Menu number for this difficulty.
    pub fn choice(self) -> i64 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Builds the strategy for this difficulty. `seed` drives any randomness.
    #[instrument]
    pub fn strategy(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(RandomStrategy::new(seed)),
            Difficulty::Medium => Box::new(GreedyStrategy::new(seed)),
            Difficulty::Hard => Box::new(MinimaxStrategy::new()),
        }
    }
}

impl From<i64> for Difficulty {
    fn from(choice: i64) -> Self {
        Self::from_choice(choice)
    }
}

impl From<Difficulty> for i64 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.choice()
    }
}
