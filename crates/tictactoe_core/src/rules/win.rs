//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::Cell;
use tracing::instrument;

/// Every index triple that wins when uniformly marked.
///
/// A fixed table is enough because the grid is always 3x3.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line holding three identical marks, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.snapshot();
    LINES.into_iter().find(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Returns true if any line holds three identical marks.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> bool {
    winning_line(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn board_with(mark: Mark, indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &index in indices {
            board.set_cell(index, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert!(!check_winner(&Board::new()));
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_either_mark() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(mark, &line);
                assert!(check_winner(&board), "{mark} on {line:?} should win");
                assert_eq!(winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(Mark::X, &[0, 1]);
        board.set_cell(2, Mark::O).unwrap();
        assert!(!check_winner(&board));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[0, 4]);
        assert!(!check_winner(&board));
    }
}
