//! Stateless rendering of the table.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use super::layout::SeatLayout;
use crate::games::tictactoe::Position;
use crate::seat::{Orientation, StatusLabel};
use crate::table::SeatId;
use crate::theme::Palette;

/// Draws both seats and the separator.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let layout = app.layout();
    let separator = Paragraph::new("─".repeat(layout.separator.width as usize))
        .style(Style::default().fg(palette.separator));
    frame.render_widget(separator, layout.separator);

    for id in SeatId::BOTH {
        draw_seat(frame, app, id, layout.seat(id));
    }
}

fn draw_seat(frame: &mut Frame, app: &App, id: SeatId, layout: &SeatLayout) {
    let table = app.table();
    let palette = app.palette();
    let orientation = table.seat(id).orientation();
    let status = table.status(id);

    if table.reset_visible() {
        let button = Paragraph::new("Play Again")
            .style(
                Style::default()
                    .bg(palette.play_again_bg)
                    .fg(palette.play_again_fg)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(button, layout.play_again);
    }

    let status_line = Paragraph::new(status.text())
        .style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status_line, layout.status);

    let cursor = (status == StatusLabel::YourTurn).then(|| app.cursor(id));
    for pos in Position::ALL {
        draw_cell(frame, app, pos, layout.cell(pos), orientation, cursor == Some(pos));
    }
}

fn draw_cell(
    frame: &mut Frame,
    app: &App,
    pos: Position,
    area: Rect,
    orientation: Orientation,
    selected: bool,
) {
    let palette: &Palette = app.palette();
    let block = Block::default()
        .borders(cell_borders(pos, orientation))
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let symbol = app
        .table()
        .history()
        .current_board()
        .get(pos)
        .symbol()
        .unwrap_or(" ");
    let text = if selected {
        format!("[{}]", symbol)
    } else {
        symbol.to_string()
    };

    let mark = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(mark, mark_row(area, inner));
}

/// Row the mark is drawn on: the cell's middle row, kept inside the
/// borders so short cells still show their mark.
fn mark_row(area: Rect, inner: Rect) -> Rect {
    if inner.is_empty() {
        return inner;
    }
    let middle = area.y + area.height / 2;
    let y = middle.clamp(inner.y, inner.y + inner.height - 1);
    Rect::new(inner.x, y, inner.width, 1)
}

/// Grid lines owned by a cell.
///
/// Upright, the first two rows draw a bottom edge and the first two
/// columns a right edge. Turning the board over moves them to the top
/// and left.
pub fn cell_borders(pos: Position, orientation: Orientation) -> Borders {
    let (horizontal, vertical) = match orientation {
        Orientation::Upright => (Borders::BOTTOM, Borders::RIGHT),
        Orientation::Flipped => (Borders::TOP, Borders::LEFT),
    };
    let mut borders = Borders::NONE;
    if pos.row() < 2 {
        borders |= horizontal;
    }
    if pos.col() < 2 {
        borders |= vertical;
    }
    borders
}
