//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: the nine cells, row-major
//! - **Rules**: occupancy, win and draw evaluation over a board
//! - **Session**: turn tracking and move application, reporting outcomes
//!   through a [`PresentationPort`]
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Mark, MoveOutcome, Notification, Session};
//!
//! let mut session = Session::new();
//! let mut events: Vec<Notification> = Vec::new();
//!
//! let outcome = session.play_move(4, &mut events)?;
//! assert_eq!(outcome, MoveOutcome::Continue(Mark::O));
//! assert_eq!(events, vec![Notification::NextTurn(Mark::O)]);
//! # Ok::<(), tictactoe_core::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod port;
mod position;
pub mod rules;
mod session;
mod types;

pub use board::{Board, CELL_COUNT, SIDE};
pub use error::{BoardError, SessionError};
pub use port::{Notification, PresentationPort};
pub use position::Position;
pub use session::{GameStatus, MoveOutcome, Rejection, Session};
pub use types::{Cell, Mark, Player};
