//! The tic-tac-toe state machine.
//!
//! A [`Game`] owns the live board for one game. It starts in
//! `AwaitingMove(X)`, alternates turns on every accepted move, and
//! settles in `Finished` as soon as the rules report a terminal board.
//! Nothing leaves `Finished`; start a new game with [`Game::restart`].

use super::action::MoveError;
use super::phases::{GameOutcome, GameState};
use super::rules;
use super::{Board, Player, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    state: GameState,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::AwaitingMove(Player::X),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the loop state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player to move, or `None` once finished.
    pub fn to_move(&self) -> Option<Player> {
        self.state.to_move()
    }

    /// Returns the positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Current outcome of the board.
    pub fn outcome(&self) -> GameOutcome {
        match self.state {
            GameState::AwaitingMove(_) => GameOutcome::InProgress,
            GameState::Finished(outcome) => outcome,
        }
    }

    /// Returns true once the game reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.state.is_finished()
    }

    /// Plays `pos` for the player to move and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] in the `Finished` state and
    /// [`MoveError::Illegal`] for an occupied square. On error the game is
    /// unchanged.
    #[instrument(skip(self), fields(player = ?self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<GameState, MoveError> {
        let player = match self.state {
            GameState::AwaitingMove(player) => player,
            GameState::Finished(_) => return Err(MoveError::GameOver),
        };

        self.board = self.board.apply(pos, player)?;
        self.history.push(pos);

        self.state = match rules::outcome(&self.board) {
            GameOutcome::InProgress => GameState::AwaitingMove(player.opponent()),
            outcome => {
                info!(%outcome, moves = self.history.len(), "Game finished");
                GameState::Finished(outcome)
            }
        };
        debug!(state = ?self.state, "Move applied");

        Ok(self.state)
    }

    /// Plays raw zero-based coordinates for the player to move.
    ///
    /// # Errors
    ///
    /// As [`Game::play`], plus [`MoveError::Illegal`] for coordinates off the
    /// board.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, row: usize, col: usize) -> Result<GameState, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        self.play(Position::from_row_col(row, col)?)
    }

    /// Rebuilds a game by playing `moves` in order from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the first error any move produces, including
    /// [`MoveError::GameOver`] for moves past the end of the game.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in moves {
            game.play(*pos)?;
        }
        Ok(game)
    }

    /// Discards this game and returns a fresh one.
    #[instrument(skip(self))]
    pub fn restart(self) -> Self {
        Self::new()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::IllegalMove;

    #[test]
    fn test_initial_state() {
        let game = Game::new();
        assert_eq!(game.state(), GameState::AwaitingMove(Player::X));
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(
            game.play(Position::Center),
            Ok(GameState::AwaitingMove(Player::O))
        );
        assert_eq!(
            game.play(Position::TopLeft),
            Ok(GameState::AwaitingMove(Player::X))
        );
    }

    #[test]
    fn test_occupied_square_leaves_game_unchanged() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        let before = game.clone();

        assert_eq!(
            game.play(Position::Center),
            Err(MoveError::Illegal(IllegalMove::Occupied(Position::Center)))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let mut game = Game::new();
        assert_eq!(
            game.play_at(3, 1),
            Err(MoveError::Illegal(IllegalMove::OutOfRange { row: 3, col: 1 }))
        );
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_finished_rejects_moves() {
        let mut game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ])
        .unwrap();
        assert_eq!(game.state(), GameState::Finished(GameOutcome::Win(Player::X)));

        let before = game.clone();
        assert_eq!(game.play(Position::BottomRight), Err(MoveError::GameOver));
        assert_eq!(game.play_at(9, 9), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_restart() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        let game = game.restart();
        assert_eq!(game, Game::new());
    }
}
