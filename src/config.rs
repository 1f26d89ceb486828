//! Game configuration loaded from TOML.
//!
//! ```toml
//! mode = "player-vs-computer"
//! difficulty = 3
//! seed = 42
//! ```
//!
//! Every key is optional. `difficulty` takes the menu numbers; values
//! outside 1-3 select Easy, as the interactive prompt does.

use crate::ai::Difficulty;
use crate::mode::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, instrument};

/// Settings fixed before a game starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
#[serde(default)]
pub struct GameConfig {
    /// Who plays O.
    mode: GameMode,

    /// Computer opponent strength.
    difficulty: Difficulty,

    /// Seed for computer randomness. Taken from the clock when absent.
    seed: Option<u64>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The configured seed, or one derived from the current time.
    #[instrument(skip(self))]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default();
            debug!(seed, "No seed configured, using clock");
            seed
        })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
