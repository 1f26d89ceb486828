//! Game orchestration between two seats.
//!
//! The orchestrator owns the live [`Game`], asks whoever holds the seat to
//! move for a position, and keeps going until the game finishes. Humans
//! are reached through [`MoveRequester`]; progress is announced through
//! [`GameObserver`]. Illegal human input is reported and asked for again;
//! it never ends the game.

use crate::ai::{Difficulty, NoLegalMoves, Strategy};
use crate::games::tictactoe::{
    Board, Game, GameOutcome, GameState, IllegalMove, MoveError, Player, Position,
};
use crate::mode::GameMode;
use tracing::{debug, info, instrument, warn};

/// Why a human move request produced no usable position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RequestError {
    /// The position is off the board or taken.
    #[display("{}", _0)]
    Illegal(IllegalMove),

    /// The input could not be read as a position.
    #[display("Unreadable move: {:?}", _0)]
    Malformed(#[error(not(source))] String),

    /// No more input will arrive.
    #[display("Input closed")]
    Closed,
}

impl From<IllegalMove> for RequestError {
    fn from(illegal: IllegalMove) -> Self {
        RequestError::Illegal(illegal)
    }
}

/// Source of human moves.
pub trait MoveRequester {
    /// Blocks until the human playing `player` names a position.
    ///
    /// # Errors
    ///
    /// [`RequestError::Illegal`] and [`RequestError::Malformed`] cause a
    /// re-prompt; [`RequestError::Closed`] ends the game.
    fn request_move(&mut self, board: &Board, player: Player) -> Result<Position, RequestError>;
}

/// Receives progress notifications. All hooks default to doing nothing.
pub trait GameObserver {
    /// Called before each human turn and once more when the game ends.
    fn render_board(&mut self, _board: &Board) {}

    /// Called after a computer seat moves.
    fn computer_moved(&mut self, _player: Player, _position: Position) {}

    /// Called when a human move is refused, before asking again.
    fn move_rejected(&mut self, _player: Player, _reason: &RequestError) {}

    /// Called exactly once, when the game finishes.
    fn report_outcome(&mut self, _outcome: GameOutcome) {}
}

/// I/O collaborator that never has a human on the other end.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl MoveRequester for Headless {
    fn request_move(&mut self, _board: &Board, _player: Player) -> Result<Position, RequestError> {
        Err(RequestError::Closed)
    }
}

impl GameObserver for Headless {}

/// Error that ends a game early.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MatchError {
    /// A computer seat could not produce a move.
    #[display("Computer player failed: {}", _0)]
    Strategy(NoLegalMoves),

    /// A computer seat produced a move the game refused.
    #[display("Move rejected: {}", _0)]
    Move(MoveError),

    /// The human input source closed mid-game.
    #[display("Move input closed before the game finished")]
    InputClosed,
}

impl From<NoLegalMoves> for MatchError {
    fn from(err: NoLegalMoves) -> Self {
        MatchError::Strategy(err)
    }
}

impl From<MoveError> for MatchError {
    fn from(err: MoveError) -> Self {
        MatchError::Move(err)
    }
}

/// Who plays a mark.
#[derive(Debug)]
pub enum Seat {
    /// A person answering through the [`MoveRequester`].
    Human,
    /// A computer opponent.
    Computer(Box<dyn Strategy>),
}

impl Seat {
    /// Returns a computer seat for `difficulty`.
    pub fn computer(difficulty: Difficulty, seed: u64) -> Self {
        Seat::Computer(difficulty.strategy(seed))
    }

    /// Display name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Seat::Human => "Human",
            Seat::Computer(strategy) => strategy.name(),
        }
    }
}

/// Orchestrates one game between two seats.
#[derive(Debug)]
pub struct Orchestrator {
    game: Game,
    player_x: Seat,
    player_o: Seat,
}

impl Orchestrator {
    /// Creates an orchestrator with a fresh game.
    #[instrument(fields(x = player_x.name(), o = player_o.name()))]
    pub fn new(player_x: Seat, player_o: Seat) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
        }
    }

    /// Seats for `mode`: X is always human; O is human or a computer of
    /// the given difficulty.
    #[instrument]
    pub fn for_mode(mode: GameMode, difficulty: Difficulty, seed: u64) -> Self {
        let player_o = match mode {
            GameMode::PlayerVsPlayer => Seat::Human,
            GameMode::PlayerVsComputer => Seat::computer(difficulty, seed),
        };
        Self::new(Seat::Human, player_o)
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game to completion.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InputClosed`] if a human input source closes,
    /// or a computer seat failure. Illegal human moves are not errors.
    #[instrument(skip_all, fields(x = self.player_x.name(), o = self.player_o.name()))]
    pub fn run<I>(&mut self, io: &mut I) -> Result<GameOutcome, MatchError>
    where
        I: MoveRequester + GameObserver,
    {
        info!("Starting game");

        loop {
            let player = match self.game.state() {
                GameState::AwaitingMove(player) => player,
                GameState::Finished(outcome) => {
                    io.render_board(self.game.board());
                    io.report_outcome(outcome);
                    info!(%outcome, "Game over");
                    return Ok(outcome);
                }
            };

            let seat = match player {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };

            match seat {
                Seat::Human => {
                    io.render_board(self.game.board());
                    Self::human_turn(&mut self.game, player, io)?;
                }
                Seat::Computer(strategy) => {
                    let position = strategy.select_move(self.game.board(), player)?;
                    self.game.play(position)?;
                    debug!(?player, ?position, strategy = strategy.name(), "Computer moved");
                    io.computer_moved(player, position);
                }
            }
        }
    }

    /// Asks the human for moves until one is accepted.
    fn human_turn<I>(game: &mut Game, player: Player, io: &mut I) -> Result<(), MatchError>
    where
        I: MoveRequester + GameObserver,
    {
        loop {
            let position = match io.request_move(game.board(), player) {
                Ok(position) => position,
                Err(RequestError::Closed) => {
                    warn!(?player, "Input closed mid-game");
                    return Err(MatchError::InputClosed);
                }
                Err(reason) => {
                    debug!(?player, %reason, "Rejected move input");
                    io.move_rejected(player, &reason);
                    continue;
                }
            };

            match game.play(position) {
                Ok(_) => {
                    debug!(?player, ?position, "Human moved");
                    return Ok(());
                }
                Err(MoveError::Illegal(illegal)) => {
                    let reason = RequestError::Illegal(illegal);
                    debug!(?player, %reason, "Rejected move");
                    io.move_rejected(player, &reason);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Starts a new game with the same seats.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game = Game::new();
    }
}
