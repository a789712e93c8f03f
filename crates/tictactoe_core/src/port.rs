//! Presentation port: the notifications a session emits to its front end.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Outcome notification sent to the presentation layer.
///
/// Exactly one is emitted per accepted move or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "event", content = "mark")]
pub enum Notification {
    /// The game continues; the given mark moves next.
    #[display("next turn: {_0}")]
    NextTurn(Mark),
    /// The given mark completed a line; the game is over.
    #[display("win: {_0}")]
    Win(Mark),
    /// The board is full with no line; the game is over.
    #[display("draw")]
    Draw,
    /// The board was reset to empty.
    #[display("cleared")]
    Cleared,
}

/// Receiver of session notifications.
pub trait PresentationPort {
    /// Handles one notification.
    fn notify(&mut self, notification: Notification);
}

impl<F> PresentationPort for F
where
    F: FnMut(Notification),
{
    fn notify(&mut self, notification: Notification) {
        self(notification)
    }
}

/// Records notifications in order.
impl PresentationPort for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
