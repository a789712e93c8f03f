//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. Rules are kept apart from board storage and
//! from the session so each can be checked on its own.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner, winning_line};

use crate::board::Board;
use crate::error::BoardError;
use tracing::instrument;

/// Returns true if the cell at `index` already holds a mark.
#[instrument(skip(board))]
pub fn is_occupied(board: &Board, index: usize) -> Result<bool, BoardError> {
    Ok(!board.get_cell(index)?.is_empty())
}
