//! Strictly Tic-Tac-Toe - Unified CLI
//!
//! Interactive menu, single games, and computer-vs-computer series.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use strictly_tictactoe::{simulate, Console, Difficulty, GameConfig, MatchError};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so prompts on stdout stay readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    match cli.command.unwrap_or(Command::Menu { seed: None }) {
        Command::Menu { seed } => run_menu(apply_seed(config, seed)),
        Command::Play {
            mode,
            difficulty,
            seed,
        } => {
            let mut config = apply_seed(config, seed);
            if let Some(mode) = mode {
                config = config.with_mode(mode);
            }
            if let Some(choice) = difficulty {
                config = config.with_difficulty(Difficulty::from_choice(choice));
            }
            run_play(config)
        }
        Command::Simulate { x, o, games, seed } => run_simulate(
            Difficulty::from_choice(x),
            Difficulty::from_choice(o),
            games,
            seed,
        ),
    }
}

fn apply_seed(config: GameConfig, seed: Option<u64>) -> GameConfig {
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

/// Run the interactive main menu
#[instrument(skip_all)]
fn run_menu(config: GameConfig) -> Result<()> {
    let mut seeds = ChaCha8Rng::seed_from_u64(config.resolve_seed());
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let games = console.run_menu(&mut seeds);
    info!(games, "Menu closed");
    Ok(())
}

/// Play one game from the configured settings
#[instrument(
    skip_all,
    fields(mode = config.mode().name(), difficulty = %config.difficulty())
)]
fn run_play(config: GameConfig) -> Result<()> {
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    match console.play(*config.mode(), *config.difficulty(), config.resolve_seed()) {
        Ok(outcome) => {
            info!(%outcome, "Game finished");
            Ok(())
        }
        Err(MatchError::InputClosed) => {
            warn!("Input closed before the game finished");
            Ok(())
        }
        Err(e) => Err(e).context("Game aborted"),
    }
}

/// Run a computer-vs-computer series and print the tally
#[instrument]
fn run_simulate(x: Difficulty, o: Difficulty, games: usize, seed: u64) -> Result<()> {
    let tally = simulate(x, o, games, seed).context("Simulation failed")?;
    println!("{} (X) vs {} (O): {}", x, o, tally);
    Ok(())
}
