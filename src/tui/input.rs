//! Key handling: cursor movement and key-to-action mapping.

use crossterm::event::KeyCode;
use tictactoe_core::{Position, SIDE};

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a new cell.
    Select(Position),
    /// Play the given cell.
    Play(Position),
    /// Clear the board and start over.
    Restart,
    /// Leave the application.
    Quit,
    /// Key has no binding.
    None,
}

/// Moves cursor based on arrow keys, stopping at the edges of the grid.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps a key to an action given the current cursor.
///
/// Digits `1`-`9` play the matching cell directly, numbered row-major from
/// the top-left like a phone keypad.
pub fn action_for(cursor: Position, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Play(cursor),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .filter(|&index| index < SIDE * SIDE)
            .and_then(Position::from_index)
            .map_or(Action::None, Action::Play),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Action::Select(move_cursor(cursor, key))
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digit_keys_play_cells() {
        assert_eq!(
            action_for(Position::Center, KeyCode::Char('1')),
            Action::Play(Position::TopLeft)
        );
        assert_eq!(
            action_for(Position::Center, KeyCode::Char('9')),
            Action::Play(Position::BottomRight)
        );
        assert_eq!(action_for(Position::Center, KeyCode::Char('0')), Action::None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for(Position::Center, KeyCode::Enter), Action::Play(Position::Center));
        assert_eq!(action_for(Position::Center, KeyCode::Char('r')), Action::Restart);
        assert_eq!(action_for(Position::Center, KeyCode::Esc), Action::Quit);
        assert_eq!(action_for(Position::Center, KeyCode::Tab), Action::None);
    }
}
