//! Line-based console front end.
//!
//! [`Console`] is the concrete I/O collaborator for the orchestrator: it
//! prompts for 1-based row and column numbers, prints the board, and
//! announces the result. Row and column may share a line (`2 3`); a
//! leftover number answers the column prompt. It also drives the interactive main menu.
//! Reader and writer are generic so the whole flow runs against
//! in-memory buffers in tests.

use crate::ai::Difficulty;
use crate::games::tictactoe::{Board, GameOutcome, Player, Position};
use crate::mode::GameMode;
use crate::orchestrator::{GameObserver, MatchError, MoveRequester, Orchestrator, RequestError};
use rand::RngCore;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Console collaborator over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
    /// Numbers typed ahead on the last move line.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `reader` and printing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    /// Consumes the console and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes `text` and flushes so prompts appear before input is read.
    fn say(&mut self, text: &str) {
        let written = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush());
        if let Err(e) = written {
            warn!(error = %e, "Failed to write to console");
        }
    }

    /// Reads one trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                warn!(error = %e, "Failed to read from console");
                None
            }
        }
    }

    /// Next whitespace-separated token, reading a new line when none are
    /// buffered. A blank line yields an empty token.
    fn next_token(&mut self) -> Option<String> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        let line = self.read_line()?;
        let mut tokens = line.split_whitespace().map(str::to_string);
        let first = tokens.next().unwrap_or_default();
        self.pending.extend(tokens);
        Some(first)
    }

    /// Prompts for one 1-based coordinate.
    fn read_coordinate(&mut self, player: Player, axis: &str) -> Result<usize, RequestError> {
        self.say(&format!("Player {}, enter {} #(1-3): ", player, axis));
        let token = self.next_token().ok_or(RequestError::Closed)?;
        match token.parse::<usize>() {
            Ok(value) if value >= 1 => Ok(value),
            _ => Err(RequestError::Malformed(token)),
        }
    }

    /// Asks for the opponent's strength, defaulting to Easy on bad input.
    ///
    /// Returns `None` at end of input.
    #[instrument(skip(self))]
    pub fn select_difficulty(&mut self) -> Option<Difficulty> {
        self.say("\nSelect Difficulty Level:\n1. Easy\n2. Medium\n3. Hard\nEnter your choice: ");
        let line = self.read_line()?;
        let choice = line.parse::<i64>().unwrap_or(0);
        if !Difficulty::is_valid_choice(choice) {
            self.say("Invalid choice! Setting to Easy by default.\n");
        }
        Some(Difficulty::from_choice(choice))
    }

    /// Plays one game in `mode` and returns its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InputClosed`] if input ends mid-game.
    #[instrument(skip(self))]
    pub fn play(
        &mut self,
        mode: GameMode,
        difficulty: Difficulty,
        seed: u64,
    ) -> Result<GameOutcome, MatchError> {
        Orchestrator::for_mode(mode, difficulty, seed).run(self)
    }

    /// Runs the main menu until the user exits or input ends.
    ///
    /// Each computer game draws its seed from `seeds`. Returns the number
    /// of games played to completion.
    #[instrument(skip_all)]
    pub fn run_menu(&mut self, seeds: &mut impl RngCore) -> usize {
        let mut completed = 0;

        loop {
            self.say(
                "\n--- TIC-TAC-TOE MENU ---\n\
                 1. Play Game\n   \
                 a) Player vs Computer\n   \
                 b) Player vs Player\n\
                 2. Exit\n\
                 Enter your choice: ",
            );
            let Some(choice) = self.read_line() else {
                info!("Input ended at main menu");
                return completed;
            };

            match choice.as_str() {
                "1" => {
                    self.say(
                        "\nSelect Mode:\n\
                         a) Player vs Computer\n\
                         b) Player vs Player\n\
                         Enter your choice (a/b): ",
                    );
                    let Some(mode) = self.read_line() else {
                        return completed;
                    };

                    let result = match mode.to_lowercase().as_str() {
                        "a" => match self.select_difficulty() {
                            Some(difficulty) => self.play(
                                GameMode::PlayerVsComputer,
                                difficulty,
                                seeds.next_u64(),
                            ),
                            None => return completed,
                        },
                        "b" => self.play(
                            GameMode::PlayerVsPlayer,
                            Difficulty::default(),
                            seeds.next_u64(),
                        ),
                        other => {
                            debug!(mode = other, "Unknown mode");
                            self.say("Invalid option!\n");
                            continue;
                        }
                    };

                    match result {
                        Ok(outcome) => {
                            completed += 1;
                            info!(%outcome, completed, "Game complete");
                        }
                        Err(e) => {
                            info!(error = %e, "Game abandoned");
                            return completed;
                        }
                    }
                }
                "2" => {
                    self.say("Exiting... Thanks for playing!\n");
                    return completed;
                }
                other => {
                    debug!(choice = other, "Unknown menu choice");
                    self.say("Invalid choice!\n");
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveRequester for Console<R, W> {
    fn request_move(&mut self, _board: &Board, player: Player) -> Result<Position, RequestError> {
        // Leftovers from a rejected or overlong line never carry into a new move.
        self.pending.clear();
        let row = self.read_coordinate(player, "row")?;
        let col = self.read_coordinate(player, "column")?;
        Ok(Position::from_row_col(row - 1, col - 1)?)
    }
}

impl<R: BufRead, W: Write> GameObserver for Console<R, W> {
    fn render_board(&mut self, board: &Board) {
        self.say(&format!("\n{}\n", board));
    }

    fn computer_moved(&mut self, player: Player, position: Position) {
        self.say(&format!(
            "Computer ({}) plays row {}, column {}.\n",
            player,
            position.row() + 1,
            position.col() + 1
        ));
    }

    fn move_rejected(&mut self, _player: Player, _reason: &RequestError) {
        self.say("Invalid Move! Please try again.\n");
    }

    fn report_outcome(&mut self, outcome: GameOutcome) {
        let message = match outcome {
            GameOutcome::Win(player) => format!("Player {} ({}) WINS!\n", player.number(), player),
            GameOutcome::Draw | GameOutcome::InProgress => "IT'S A DRAW!\n".to_string(),
        };
        self.say(&message);
    }
}
