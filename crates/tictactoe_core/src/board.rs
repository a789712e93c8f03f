//! Board state: the nine cells of the grid.

use crate::error::BoardError;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side length of the square grid.
pub const SIDE: usize = 3;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` at `index`, overwriting whatever was there.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        let cell = self.cells.get_mut(index).ok_or_else(|| {
            warn!(index, "Attempted to write outside the board");
            BoardError::OutOfRange { index }
        })?;
        *cell = Cell::Marked(mark);
        Ok(())
    }

    /// Returns the cell at `index`.
    #[instrument(skip(self))]
    pub fn get_cell(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::OutOfRange { index })
    }

    /// Returns a copy of all cells in index order.
    pub fn snapshot(&self) -> [Cell; CELL_COUNT] {
        self.cells
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Formats the board as a compact text grid.
    ///
    /// Empty cells show their 1-based number so a reader can tell which
    /// key selects them.
    pub fn render(&self) -> String {
        self.render_with(|mark| mark.to_string())
    }

    /// Formats the board using caller-supplied symbols for each mark.
    pub fn render_with(&self, symbol: impl Fn(Mark) -> String) -> String {
        let mut result = String::new();
        for row in 0..SIDE {
            for col in 0..SIDE {
                let index = row * SIDE + col;
                match self.cells[index] {
                    Cell::Empty => result.push_str(&(index + 1).to_string()),
                    Cell::Marked(mark) => result.push_str(&symbol(mark)),
                }
                if col < SIDE - 1 {
                    result.push('|');
                }
            }
            if row < SIDE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
