//! Turns session notifications into the text a front end displays.

use crate::config::GameConfig;
use tictactoe_core::{Mark, Notification, PresentationPort};
use tracing::{debug, instrument};

/// Message state for a single game display.
///
/// The status line tracks whose turn it is. The banner is the end-of-game
/// message and stays up until the board is cleared.
#[derive(Debug, Clone)]
pub struct MessagePresenter {
    config: GameConfig,
    status: String,
    banner: Option<String>,
}

impl MessagePresenter {
    /// Creates a presenter with an empty status line and no banner.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            status: String::new(),
            banner: None,
        }
    }

    /// Returns the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the end-of-game banner, if the game is over.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Returns the configured symbol for `mark`.
    pub fn label(&self, mark: Mark) -> &str {
        self.config.label(mark)
    }

    /// Formats the "next to move" message.
    pub fn turn_message(&self, mark: Mark) -> String {
        format!("It's {}'s turn!", self.label(mark))
    }
}

impl PresentationPort for MessagePresenter {
    fn notify(&mut self, notification: Notification) {
        debug!(%notification, "Presenting notification");
        match notification {
            Notification::NextTurn(mark) => {
                self.status = self.turn_message(mark);
            }
            Notification::Win(mark) => {
                self.banner = Some(format!("{} Won!", self.label(mark)));
            }
            Notification::Draw => {
                self.banner = Some("It's a Draw!".to_string());
            }
            Notification::Cleared => {
                self.status.clear();
                self.banner = None;
            }
        }
    }
}
