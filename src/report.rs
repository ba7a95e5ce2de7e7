//! Headless replay of a move list.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::games::tictactoe::{Board, History, MoveError, Outcome, Position};
use crate::seat::StatusLabel;
use crate::table::{SeatId, Table};

/// Where a replayed game ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Cell indices played, in order.
    pub moves: Vec<usize>,
    /// Final board.
    pub board: Board,
    /// Outcome of the final board.
    pub outcome: Outcome,
    /// Status line of the top (X) seat.
    pub top_status: StatusLabel,
    /// Status line of the bottom (O) seat.
    pub bottom_status: StatusLabel,
}

impl ReplayReport {
    /// Plays `cells` alternately from X and reports the result.
    ///
    /// # Errors
    ///
    /// `MoveError::OutOfBounds` for a cell past 8, or the engine's error
    /// for the first illegal move.
    #[instrument]
    pub fn from_cells(cells: &[usize]) -> Result<Self, MoveError> {
        let positions = cells
            .iter()
            .map(|cell| Position::from_index(*cell).ok_or(MoveError::OutOfBounds(*cell)))
            .collect::<Result<Vec<_>, _>>()?;
        let table = Table::from_history(History::replay(&positions)?, true);

        Ok(Self {
            moves: cells.to_vec(),
            board: *table.history().current_board(),
            outcome: table.outcome(),
            top_status: table.status(SeatId::Top),
            bottom_status: table.status(SeatId::Bottom),
        })
    }

    /// Plain-text rendering for the terminal.
    pub fn render(&self) -> String {
        format!(
            "{}\n\nOutcome: {}\nTop (X): {}\nBottom (O): {}",
            self.board.display(),
            self.outcome,
            self.top_status.text().trim(),
            self.bottom_status.text().trim(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_top_row_win() {
        let report = ReplayReport::from_cells(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(report.outcome, Outcome::Winner(Player::X));
        assert_eq!(report.top_status, StatusLabel::YouWon);
        assert_eq!(report.bottom_status, StatusLabel::YouLost);
    }

    #[test]
    fn test_out_of_range_cell() {
        assert_eq!(
            ReplayReport::from_cells(&[0, 9]),
            Err(MoveError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_render_mentions_outcome() {
        let report = ReplayReport::from_cells(&[4]).unwrap();
        let text = report.render();
        assert!(text.contains("0|1|2\n-+-+-\n3|X|5"));
        assert!(text.contains("Outcome: In progress"));
        assert!(text.contains("Bottom (O): Your Turn"));
    }

    #[test]
    fn test_json_report() {
        let report = ReplayReport::from_cells(&[0, 2, 1, 3, 5, 4, 6, 7, 8]).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"], "Tie");
        assert_eq!(json["top_status"], "Tie");
        assert_eq!(json["moves"].as_array().unwrap().len(), 9);
    }
}
