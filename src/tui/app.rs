//! Application state and logic.

use super::input::{Action, action_for};
use crate::config::GameConfig;
use crate::presenter::MessagePresenter;
use crossterm::event::KeyCode;
use tictactoe_core::{MoveOutcome, Position, Session, SessionError};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    presenter: MessagePresenter,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: Session::new(),
            presenter: MessagePresenter::new(config),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the presenter holding the current messages.
    pub fn presenter(&self) -> &MessagePresenter {
        &self.presenter
    }

    /// Gets the cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line text.
    ///
    /// Before the first move, and after a restart, nothing has been announced
    /// yet, so the line falls back to the current player's turn.
    pub fn status_line(&self) -> String {
        if self.presenter.status().is_empty() {
            self.presenter
                .turn_message(self.session.current_player().mark())
        } else {
            self.presenter.status().to_string()
        }
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), SessionError> {
        match action_for(self.cursor, key) {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Restart => self.restart(),
            Action::Select(position) => self.cursor = position,
            Action::Play(position) => {
                self.cursor = position;
                self.play(position)?;
            }
            Action::None => {}
        }
        Ok(())
    }

    /// Plays the current player's mark at `position`.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) -> Result<MoveOutcome, SessionError> {
        let outcome = self
            .session
            .play_move(position.to_index(), &mut self.presenter)?;
        if let MoveOutcome::Rejected(reason) = outcome {
            debug!(%position, %reason, "Move ignored");
        }
        Ok(outcome)
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.session.reset(&mut self.presenter);
        self.cursor = Position::Center;
    }
}
