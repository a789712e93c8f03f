//! Error types for caller contract violations.
//!
//! Moves that break the rules of the game (occupied cell, game over) are not
//! errors; see [`crate::MoveOutcome::Rejected`]. These types cover indices the
//! caller should never have produced.

/// Error raised by board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The index does not name one of the nine cells.
    #[display("Cell index {index} out of range (must be 0-8)")]
    OutOfRange {
        /// The offending index.
        index: usize,
    },
}

impl std::error::Error for BoardError {}

/// Error raised by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The move index does not name one of the nine cells.
    #[display("Move index {index} out of range (must be 0-8)")]
    OutOfRange {
        /// The offending index.
        index: usize,
    },
}

impl std::error::Error for SessionError {}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfRange { index } => SessionError::OutOfRange { index },
        }
    }
}
