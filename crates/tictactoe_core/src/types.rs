//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// First player's mark (moves on odd turns).
    X,
    /// Second player's mark (moves on even turns).
    O,
}

impl Mark {
    /// Returns the mark that moves on the given turn (1-based).
    #[instrument]
    pub fn for_turn(turn: u8) -> Self {
        if turn % 2 == 1 { Mark::X } else { Mark::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell carrying a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A participant, identified only by the mark it places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    mark: Mark,
}

impl Player {
    /// Player A, plays `X` and moves first.
    pub const A: Player = Player { mark: Mark::X };
    /// Player B, plays `O`.
    pub const B: Player = Player { mark: Mark::O };

    /// Returns the player in control on the given turn (1-based).
    #[instrument]
    pub fn for_turn(turn: u8) -> Self {
        match Mark::for_turn(turn) {
            Mark::X => Player::A,
            Mark::O => Player::B,
        }
    }

    /// Returns this player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_parity() {
        assert_eq!(Mark::for_turn(1), Mark::X);
        assert_eq!(Mark::for_turn(2), Mark::O);
        assert_eq!(Mark::for_turn(9), Mark::X);
        assert_eq!(Player::for_turn(4), Player::B);
        assert_eq!(Player::for_turn(5).mark(), Mark::X);
    }

    #[test]
    fn test_cell_mark() {
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::Marked(Mark::O).mark(), Some(Mark::O));
        assert!(Cell::default().is_empty());
    }
}
