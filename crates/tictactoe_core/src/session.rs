//! Game session controller.
//!
//! A [`Session`] owns one board, the turn counter and the game status. Each
//! call to [`Session::play_move`] runs to completion and emits at most one
//! [`Notification`] through the supplied [`PresentationPort`].

use crate::board::Board;
use crate::error::SessionError;
use crate::port::{Notification, PresentationPort};
use crate::rules;
use crate::types::{Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The game has already been won or drawn.
    #[display("game is already over")]
    GameOver,
}

/// Result of a call to [`Session::play_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was ignored; nothing changed and nothing was emitted.
    Rejected(Rejection),
    /// The move was applied and the given mark moves next.
    Continue(Mark),
    /// The move completed a line for the given mark.
    Won(Mark),
    /// The move filled the board without completing a line.
    Draw,
}

/// One game of tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    turn: u8,
    status: GameStatus,
}

impl Session {
    /// Creates a new game with an empty board, turn 1.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: 1,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current turn (1-based).
    ///
    /// After a win or draw this is the turn on which the game ended.
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        Player::for_turn(self.turn)
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Plays the current player's mark at `index`.
    ///
    /// Moves after the game is over and moves onto occupied cells are ignored
    /// and reported as [`MoveOutcome::Rejected`] without notifying `port`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::OutOfRange`] if `index` is not in 0-8.
    #[instrument(skip(self, port), fields(turn = self.turn))]
    pub fn play_move(
        &mut self,
        index: usize,
        port: &mut impl PresentationPort,
    ) -> Result<MoveOutcome, SessionError> {
        let occupied = rules::is_occupied(&self.board, index)?;

        if self.is_over() {
            debug!(status = ?self.status, "Ignoring move after game over");
            return Ok(MoveOutcome::Rejected(Rejection::GameOver));
        }
        if occupied {
            debug!("Ignoring move onto occupied cell");
            return Ok(MoveOutcome::Rejected(Rejection::Occupied));
        }

        let mark = self.current_player().mark();
        self.board.set_cell(index, mark)?;
        debug!(%mark, "Mark placed");

        if rules::check_winner(&self.board) {
            info!(%mark, turn = self.turn, "Game won");
            self.status = GameStatus::Won(mark);
            port.notify(Notification::Win(mark));
            return Ok(MoveOutcome::Won(mark));
        }

        if rules::is_draw(&self.board, self.turn) {
            info!(turn = self.turn, "Game drawn");
            self.status = GameStatus::Draw;
            port.notify(Notification::Draw);
            return Ok(MoveOutcome::Draw);
        }

        self.turn += 1;
        let next = self.current_player().mark();
        port.notify(Notification::NextTurn(next));
        Ok(MoveOutcome::Continue(next))
    }

    /// Clears the board and starts over at turn 1.
    #[instrument(skip(self, port))]
    pub fn reset(&mut self, port: &mut impl PresentationPort) {
        info!(status = ?self.status, turn = self.turn, "Resetting session");
        self.board.reset();
        self.turn = 1;
        self.status = GameStatus::InProgress;
        port.notify(Notification::Cleared);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
