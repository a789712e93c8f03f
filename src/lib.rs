//! Tic-tac-toe front ends.
//!
//! Game rules live in [`tictactoe_core`]; this crate adds the pieces that
//! put a game in front of a person.
//!
//! # Architecture
//!
//! - **Config**: display symbols and logging settings from TOML
//! - **Presenter**: turns session notifications into status and banner text
//! - **Script**: non-interactive play from a list of moves
//! - **TUI**: interactive terminal board

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod presenter;
pub mod script;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use presenter::MessagePresenter;

pub use tictactoe_core::{
    Board, Cell, GameStatus, Mark, MoveOutcome, Notification, Position, PresentationPort,
    Rejection, Session, SessionError,
};
