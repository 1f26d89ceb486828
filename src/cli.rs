//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::GameMode;

/// Strictly Tic-Tac-Toe - console game with computer opponents
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Console tic-tac-toe against a human or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the interactive main menu
    Menu {
        /// Seed for computer randomness
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play a single game
    Play {
        /// Who plays O
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Computer strength: 1 = Easy, 2 = Medium, 3 = Hard (others mean Easy)
        #[arg(short, long, allow_negative_numbers = true)]
        difficulty: Option<i64>,

        /// Seed for computer randomness
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two computer strengths against each other
    Simulate {
        /// Strength playing X (1-3)
        #[arg(short, long, default_value = "3", allow_negative_numbers = true)]
        x: i64,

        /// Strength playing O (1-3)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        o: i64,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Seed for the first game
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}
