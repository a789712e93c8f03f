//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::board::{Board, CELL_COUNT};
use tracing::instrument;

/// Returns true when `move_count` marks have filled the board and no line
/// was completed.
///
/// The count comes from the session's turn counter rather than a board scan.
/// Callers must check for a win first: a winning ninth move is a win.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, move_count: u8) -> bool {
    usize::from(move_count) == CELL_COUNT && !check_winner(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn fill(marks: [Mark; 9]) -> Board {
        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            board.set_cell(index, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        use Mark::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(is_draw(&board, 9));
    }

    #[test]
    fn test_not_draw_before_ninth_move() {
        use Mark::{O, X};
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(!is_draw(&board, 8));
        assert!(!is_draw(&Board::new(), 0));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Mark::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(!is_draw(&board, 9));
    }
}
