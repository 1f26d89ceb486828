//! Headless computer-vs-computer matches.

use crate::ai::Difficulty;
use crate::games::tictactoe::{GameOutcome, Player};
use crate::orchestrator::{Headless, MatchError, Orchestrator, Seat};
use derive_getters::Getters;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Win/draw counts over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by X.
    x_wins: usize,
    /// Games won by O.
    o_wins: usize,
    /// Drawn games.
    draws: usize,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    /// Total games counted.
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    /// Games won by `player`.
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Plays one game between two computer difficulties.
///
/// # Errors
///
/// Propagates strategy failures; computer seats never wait on input.
#[instrument]
pub fn play_match(x: Difficulty, o: Difficulty, seed: u64) -> Result<GameOutcome, MatchError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut orchestrator = Orchestrator::new(
        Seat::computer(x, rng.next_u64()),
        Seat::computer(o, rng.next_u64()),
    );
    orchestrator.run(&mut Headless)
}

/// Plays `games` games and tallies the results.
///
/// Game `i` is seeded from `seed` and `i`, so a series replays exactly.
#[instrument]
pub fn simulate(x: Difficulty, o: Difficulty, games: usize, seed: u64) -> Result<Tally, MatchError> {
    let mut tally = Tally::default();
    for game in 0..games {
        let outcome = play_match(x, o, seed.wrapping_add(game as u64))?;
        debug!(game, %outcome, "Simulated game");
        tally.record(outcome);
    }
    info!(%tally, "Simulation complete");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts() {
        let mut tally = Tally::default();
        tally.record(GameOutcome::Win(Player::X));
        tally.record(GameOutcome::Draw);
        tally.record(GameOutcome::Win(Player::O));
        tally.record(GameOutcome::Win(Player::O));
        assert_eq!(tally.games(), 4);
        assert_eq!(tally.wins(Player::O), 2);
        assert_eq!(tally.to_string(), "4 games: X won 1, O won 2, 1 drawn");
    }

    #[test]
    fn test_series_is_reproducible() {
        let first = simulate(Difficulty::Easy, Difficulty::Medium, 20, 11).unwrap();
        let second = simulate(Difficulty::Easy, Difficulty::Medium, 20, 11).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.games(), 20);
    }
}
