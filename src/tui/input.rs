//! Keyboard mapping and cursor movement.
//!
//! The top seat uses `w a s d` + space, the bottom seat the arrow keys
//! + enter. Directions are in board coordinates, which for a flipped
//! seat is the way its own player sees the board.

use crossterm::event::KeyCode;

use crate::games::tictactoe::Position;
use crate::table::SeatId;

/// Cursor step direction in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move a seat's cursor.
    Cursor(SeatId, Step),
    /// Tap the cell under a seat's cursor.
    Place(SeatId),
    /// Press Play Again.
    PlayAgain,
    /// Leave the table.
    Quit,
}

/// Maps a key to an action, `None` for unbound keys.
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::PlayAgain,

        KeyCode::Char('w') => Action::Cursor(SeatId::Top, Step::Up),
        KeyCode::Char('s') => Action::Cursor(SeatId::Top, Step::Down),
        KeyCode::Char('a') => Action::Cursor(SeatId::Top, Step::Left),
        KeyCode::Char('d') => Action::Cursor(SeatId::Top, Step::Right),
        KeyCode::Char(' ') => Action::Place(SeatId::Top),

        KeyCode::Up => Action::Cursor(SeatId::Bottom, Step::Up),
        KeyCode::Down => Action::Cursor(SeatId::Bottom, Step::Down),
        KeyCode::Left => Action::Cursor(SeatId::Bottom, Step::Left),
        KeyCode::Right => Action::Cursor(SeatId::Bottom, Step::Right),
        KeyCode::Enter => Action::Place(SeatId::Bottom),

        _ => return None,
    };
    Some(action)
}

/// Moves cursor one step, staying put at the board's edge.
pub fn move_cursor(cursor: Position, step: Step) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match step {
        Step::Up => row.checked_sub(1).map(|r| (r, col)),
        Step::Down => Some((row + 1, col)),
        Step::Left => col.checked_sub(1).map(|c| (row, c)),
        Step::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
