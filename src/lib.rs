//! Strictly Tic-Tac-Toe library - console tic-tac-toe with computer opponents
//!
//! # Architecture
//!
//! - **Games**: board, rules and the game state machine
//! - **AI**: random, greedy and minimax move selection
//! - **Orchestrator**: runs one game between human and computer seats
//! - **Console**: line-based prompts, board rendering and the main menu
//! - **Arena**: headless computer-vs-computer series
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, MinimaxStrategy, Player, Position, Strategy};
//!
//! let mut hard = MinimaxStrategy::new();
//! let opening = hard.select_move(&Board::new(), Player::X).unwrap();
//! assert_eq!(opening, Position::TopLeft);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod arena;
mod config;
mod console;
mod games;
mod mode;
mod orchestrator;

// Crate-level exports - Game types
pub use games::tictactoe::{
    rules, Board, Game, GameOutcome, GameState, IllegalMove, MoveError, ParseBoardError, Player,
    Position, Square,
};

// Crate-level exports - Computer opponents
pub use ai::{
    Difficulty, GreedyStrategy, MinimaxStrategy, NoLegalMoves, RandomStrategy, Strategy,
};

// Crate-level exports - Orchestration
pub use mode::GameMode;
pub use orchestrator::{
    GameObserver, Headless, MatchError, MoveRequester, Orchestrator, RequestError, Seat,
};

// Crate-level exports - Front end and tooling
pub use arena::{play_match, simulate, Tally};
pub use config::{ConfigError, GameConfig};
pub use console::Console;
