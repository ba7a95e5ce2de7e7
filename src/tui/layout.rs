//! Screen geometry for the two seats.
//!
//! Rendering and mouse hit-testing both go through [`table_layout`], so a
//! click always lands on the cell that was drawn under it.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::games::tictactoe::Position;
use crate::seat::Orientation;
use crate::table::SeatId;

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Width of the Play Again button.
pub const PLAY_AGAIN_WIDTH: u16 = 14;

const GRID_WIDTH: u16 = CELL_WIDTH * 3;

/// Vertical sizing of one seat, roomiest first.
#[derive(Debug, Clone, Copy)]
struct Metrics {
    cell_height: u16,
    gap: u16,
}

const METRICS: [Metrics; 3] = [
    Metrics {
        cell_height: 3,
        gap: 1,
    },
    Metrics {
        cell_height: 3,
        gap: 0,
    },
    Metrics {
        cell_height: 2,
        gap: 0,
    },
];

impl Metrics {
    /// Picks the roomiest sizing that fits `height` rows.
    fn for_height(height: u16) -> Self {
        METRICS
            .into_iter()
            .find(|m| m.seat_height() <= height)
            .unwrap_or(METRICS[METRICS.len() - 1])
    }

    fn grid_height(self) -> u16 {
        self.cell_height * 3
    }

    // Play Again, gap, status, gap, grid.
    fn seat_height(self) -> u16 {
        2 + 2 * self.gap + self.grid_height()
    }
}

/// Where one seat's widgets go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatLayout {
    /// Play Again button.
    pub play_again: Rect,
    /// Status line.
    pub status: Rect,
    /// Cell rectangles indexed by board position, not by screen slot.
    pub cells: [Rect; 9],
}

impl SeatLayout {
    /// Rectangle for `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }
}

/// Where everything on the table goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Upper seat.
    pub top: SeatLayout,
    /// Line between the seats.
    pub separator: Rect,
    /// Lower seat.
    pub bottom: SeatLayout,
}

/// What a screen coordinate points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A cell on a seat's board.
    Cell(SeatId, Position),
    /// A seat's Play Again button.
    PlayAgain(SeatId),
}

impl TableLayout {
    /// Layout of seat `id`.
    pub fn seat(&self, id: SeatId) -> &SeatLayout {
        match id {
            SeatId::Top => &self.top,
            SeatId::Bottom => &self.bottom,
        }
    }

    /// Finds what lies under (`column`, `row`).
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        for id in SeatId::BOTH {
            let seat = self.seat(id);
            if let Some(pos) = Position::ALL
                .into_iter()
                .find(|pos| contains(seat.cell(*pos), column, row))
            {
                return Some(Hit::Cell(id, pos));
            }
            if contains(seat.play_again, column, row) {
                return Some(Hit::PlayAgain(id));
            }
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Splits `area` into two seats with a separator between them.
pub fn table_layout(area: Rect, top: Orientation) -> TableLayout {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    TableLayout {
        top: seat_layout(halves[0], top),
        separator: halves[1],
        bottom: seat_layout(halves[2], Orientation::Upright),
    }
}

/// Places one seat's widgets, centered in `area`.
///
/// A flipped seat is the upright one turned 180°: its rows come in
/// reverse order and cell `p` sits in the screen slot of `p.rotated()`.
/// Short areas drop the gaps first, then cell height.
pub fn seat_layout(area: Rect, orientation: Orientation) -> SeatLayout {
    let metrics = Metrics::for_height(area.height);
    let (gap, grid_height) = (metrics.gap, metrics.grid_height());
    let block = center_rect(
        area,
        GRID_WIDTH.max(PLAY_AGAIN_WIDTH),
        metrics.seat_height(),
    );

    let (play_again_y, status_y, grid_y) = match orientation {
        Orientation::Upright => (block.y, block.y + 1 + gap, block.y + 2 + 2 * gap),
        Orientation::Flipped => (
            block.y + grid_height + 2 * gap + 1,
            block.y + grid_height + gap,
            block.y,
        ),
    };

    let play_again = Rect::new(
        block.x + (block.width.saturating_sub(PLAY_AGAIN_WIDTH)) / 2,
        play_again_y,
        PLAY_AGAIN_WIDTH,
        1,
    )
    .intersection(area);
    let status = Rect::new(block.x, status_y, block.width, 1).intersection(area);

    let grid_x = block.x + (block.width.saturating_sub(GRID_WIDTH)) / 2;
    let cells = Position::ALL.map(|pos| {
        let slot = match orientation {
            Orientation::Upright => pos,
            Orientation::Flipped => pos.rotated(),
        };
        Rect::new(
            grid_x + slot.col() as u16 * CELL_WIDTH,
            grid_y + slot.row() as u16 * metrics.cell_height,
            CELL_WIDTH,
            metrics.cell_height,
        )
        .intersection(area)
    });

    SeatLayout {
        play_again,
        status,
        cells,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_every_cell_hits_itself() {
        let layout = table_layout(Rect::new(0, 0, 80, 40), Orientation::Flipped);
        for id in SeatId::BOTH {
            for pos in Position::ALL {
                let (x, y) = center(layout.seat(id).cell(pos));
                assert_eq!(layout.hit(x, y), Some(Hit::Cell(id, pos)));
            }
        }
    }

    #[test]
    fn test_flipped_seat_is_rotated() {
        let layout = table_layout(Rect::new(0, 0, 80, 40), Orientation::Flipped);
        let top = layout.top;
        assert!(top.cell(Position::TopLeft).x > top.cell(Position::BottomRight).x);
        assert!(top.cell(Position::TopLeft).y > top.cell(Position::BottomRight).y);
        assert!(top.play_again.y > top.status.y);
        assert!(top.status.y > top.cell(Position::TopLeft).y);

        let bottom = layout.bottom;
        assert!(bottom.cell(Position::TopLeft).x < bottom.cell(Position::BottomRight).x);
        assert!(bottom.play_again.y < bottom.status.y);
    }

    #[test]
    fn test_unmirrored_top_matches_bottom_shape() {
        let layout = table_layout(Rect::new(0, 0, 80, 40), Orientation::Upright);
        let top = layout.top;
        assert!(top.cell(Position::TopLeft).y < top.cell(Position::BottomRight).y);
        assert!(top.play_again.y < top.status.y);
    }

    #[test]
    fn test_seats_do_not_overlap() {
        let layout = table_layout(Rect::new(0, 0, 80, 40), Orientation::Flipped);
        let top_bottom_edge = layout.top.play_again.y;
        assert!(top_bottom_edge < layout.separator.y);
        assert!(layout.bottom.play_again.y > layout.separator.y);
    }

    #[test]
    fn test_separator_is_not_a_target() {
        let layout = table_layout(Rect::new(0, 0, 80, 40), Orientation::Flipped);
        assert_eq!(layout.hit(40, layout.separator.y), None);
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn test_play_again_hit() {
        let layout = table_layout(Rect::new(0, 0, 80, 40), Orientation::Flipped);
        let (x, y) = center(layout.bottom.play_again);
        assert_eq!(layout.hit(x, y), Some(Hit::PlayAgain(SeatId::Bottom)));
    }

    #[test]
    fn test_standard_terminal_fits_both_seats() {
        let layout = table_layout(Rect::new(0, 0, 80, 24), Orientation::Flipped);
        for id in SeatId::BOTH {
            let seat = layout.seat(id);
            assert_eq!(seat.play_again.height, 1);
            assert_eq!(seat.play_again.width, PLAY_AGAIN_WIDTH);
            assert_eq!(seat.status.height, 1);
            for pos in Position::ALL {
                assert_eq!(seat.cell(pos).height, 3);
                let (x, y) = center(seat.cell(pos));
                assert_eq!(layout.hit(x, y), Some(Hit::Cell(id, pos)));
            }
        }
        assert!(layout.top.play_again.y < layout.separator.y);
    }

    #[test]
    fn test_short_seat_shrinks_cells() {
        let seat = seat_layout(Rect::new(0, 0, 40, 9), Orientation::Upright);
        assert_eq!(seat.play_again.height, 1);
        for pos in Position::ALL {
            assert_eq!(seat.cell(pos).height, 2);
        }
    }

    #[test]
    fn test_tiny_area_stays_inside() {
        let area = Rect::new(0, 0, 10, 5);
        let layout = table_layout(area, Orientation::Flipped);
        for id in SeatId::BOTH {
            for rect in layout.seat(id).cells.into_iter().filter(|r| !r.is_empty()) {
                assert!(rect.x + rect.width <= area.width);
                assert!(rect.y + rect.height <= area.height);
            }
        }
    }
}
