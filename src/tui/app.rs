//! Application state and event handling.

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, instrument};

use super::input::{Action, action_for_key, move_cursor};
use super::layout::{Hit, TableLayout, table_layout};
use crate::games::tictactoe::Position;
use crate::table::{SeatId, Table};
use crate::theme::Palette;

/// Main application state.
#[derive(Debug)]
pub struct App {
    table: Table,
    palette: Palette,
    cursors: [Position; 2],
    area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `table`.
    pub fn new(table: Table, palette: Palette) -> Self {
        Self {
            table,
            palette,
            cursors: [Position::Center; 2],
            area: Rect::default(),
            should_quit: false,
        }
    }

    /// The table being played.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Colors in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Cursor of seat `id`.
    pub fn cursor(&self, id: SeatId) -> Position {
        self.cursors[id as usize]
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the area last drawn into, for mouse hit-testing.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Layout of the area last drawn into.
    pub fn layout(&self) -> TableLayout {
        table_layout(self.area, self.table.top().orientation())
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // crossterm reports releases too on some platforms.
        if key.kind == KeyEventKind::Release {
            return;
        }
        match action_for_key(key.code) {
            Some(action) => self.apply(action),
            None => debug!("Unbound key"),
        }
    }

    /// Handles a mouse event. Only left clicks do anything.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.layout().hit(mouse.column, mouse.row) {
            Some(Hit::Cell(id, pos)) => {
                self.cursors[id as usize] = pos;
                self.table.tap(id, pos);
            }
            Some(Hit::PlayAgain(_)) => {
                self.table.play_again();
            }
            None => {}
        }
    }

    /// Applies a decoded action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Cursor(id, step) => {
                let cursor = &mut self.cursors[id as usize];
                *cursor = move_cursor(*cursor, step);
            }
            Action::Place(id) => {
                let pos = self.cursor(id);
                self.table.tap(id, pos);
            }
            Action::PlayAgain => {
                self.table.play_again();
            }
            Action::Quit => self.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Outcome;
    use crate::theme::{Theme, palette};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        let mut app = App::new(Table::default(), palette(Theme::Dark));
        app.set_area(Rect::new(0, 0, 80, 40));
        app
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn click_cell(app: &mut App, id: SeatId, cell: usize) {
        let rect = app.layout().seat(id).cell(Position::from_index(cell).unwrap());
        app.handle_mouse(click(rect.x + 1, rect.y + 1));
    }

    #[test]
    fn test_keyboard_turns() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.table().history().current_move(), 0);

        app.handle_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert_eq!(app.table().history().current_move(), 1);

        app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.table().history().current_move(), 2);
        assert_eq!(app.cursor(SeatId::Bottom), Position::TopCenter);
    }

    #[test]
    fn test_mouse_game_and_play_again() {
        let mut app = app();
        for (i, cell) in [0, 3, 1, 4, 2].into_iter().enumerate() {
            let id = if i % 2 == 0 { SeatId::Top } else { SeatId::Bottom };
            click_cell(&mut app, id, cell);
        }
        assert!(matches!(app.table().outcome(), Outcome::Winner(_)));

        let rect = app.layout().bottom.play_again;
        app.handle_mouse(click(rect.x + 1, rect.y));
        assert_eq!(app.table().history().current_move(), 0);
    }

    #[test]
    fn test_click_on_wrong_seat_is_ignored() {
        let mut app = app();
        click_cell(&mut app, SeatId::Bottom, 0);
        assert_eq!(app.table().history().current_move(), 0);
        assert_eq!(app.cursor(SeatId::Bottom), Position::TopLeft);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit());
    }
}
