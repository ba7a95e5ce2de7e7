//! Turn authorization for one side of the table.
//!
//! Each board on screen belongs to a seat, and a seat only ever places
//! its own mark. Taps from a seat that may not move are dropped without
//! surfacing anything to the player.

use crate::games::tictactoe::{History, Mark, Move, Outcome, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Which way a seat's board faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Orientation {
    /// Readable from the bottom edge of the screen.
    #[default]
    Upright,
    /// Turned 180° for the player across the table.
    Flipped,
}

/// Status line shown above a seat's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusLabel {
    /// This seat may move.
    YourTurn,
    /// The other seat is moving.
    Waiting,
    /// This seat completed a line.
    YouWon,
    /// The other seat completed a line.
    YouLost,
    /// Board filled with no line.
    Tie,
}

impl StatusLabel {
    /// Text rendered for this label.
    pub fn text(self) -> &'static str {
        match self {
            StatusLabel::YourTurn => "Your Turn",
            StatusLabel::Waiting => " ",
            StatusLabel::YouWon => "You Won!",
            StatusLabel::YouLost => "You Lost!",
            StatusLabel::Tie => "Tie!",
        }
    }
}

impl std::fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// A board view bound to one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Seat {
    mark: Mark,
    orientation: Orientation,
}

impl Seat {
    /// The mark this seat places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// How this seat's board is drawn.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether a tap on `pos` from this seat would be applied right now.
    pub fn accepts(&self, history: &History, pos: Position) -> bool {
        history.to_move() == self.mark
            && history.outcome() == Outcome::InProgress
            && history.current_board().is_empty(pos)
    }

    /// Applies a tap on `pos` if this seat may make it.
    ///
    /// Returns whether the history changed.
    #[instrument(skip(self, history), fields(mark = %self.mark, position = %pos))]
    pub fn tap(&self, history: &mut History, pos: Position) -> bool {
        if !self.accepts(history, pos) {
            debug!(to_move = %history.to_move(), "Tap ignored");
            return false;
        }

        match history.play(Move::new(self.mark, pos)) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Authorized tap was rejected by the engine");
                false
            }
        }
    }

    /// Status line for this seat.
    pub fn status(&self, history: &History) -> StatusLabel {
        match history.outcome() {
            Outcome::InProgress if history.to_move() == self.mark => StatusLabel::YourTurn,
            Outcome::InProgress => StatusLabel::Waiting,
            Outcome::Winner(winner) if winner == self.mark => StatusLabel::YouWon,
            Outcome::Winner(_) => StatusLabel::YouLost,
            Outcome::Tie => StatusLabel::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    fn seats() -> (Seat, Seat) {
        (
            Seat::new(Player::X, Orientation::Flipped),
            Seat::new(Player::O, Orientation::Upright),
        )
    }

    #[test]
    fn test_only_turn_owner_accepted() {
        let (x, o) = seats();
        let history = History::new();
        assert!(x.accepts(&history, Position::TopLeft));
        assert!(!o.accepts(&history, Position::TopLeft));
    }

    #[test]
    fn test_tap_from_waiting_seat_is_noop() {
        let (_, o) = seats();
        let mut history = History::new();
        let before = history.clone();

        assert!(!o.tap(&mut history, Position::TopLeft));
        assert_eq!(history, before);
    }

    #[test]
    fn test_tap_on_occupied_square_is_noop() {
        let (x, o) = seats();
        let mut history = History::new();
        assert!(x.tap(&mut history, Position::Center));
        let before = history.clone();

        assert!(!o.tap(&mut history, Position::Center));
        assert_eq!(history, before);
    }

    #[test]
    fn test_status_labels_follow_turn() {
        let (x, o) = seats();
        let mut history = History::new();
        assert_eq!(x.status(&history), StatusLabel::YourTurn);
        assert_eq!(o.status(&history), StatusLabel::Waiting);

        x.tap(&mut history, Position::Center);
        assert_eq!(x.status(&history), StatusLabel::Waiting);
        assert_eq!(o.status(&history), StatusLabel::YourTurn);
    }

    #[test]
    fn test_status_after_win() {
        let (x, o) = seats();
        let cells = [0, 3, 1, 4, 2].map(|i| Position::from_index(i).unwrap());
        let history = History::replay(&cells).unwrap();

        assert_eq!(x.status(&history), StatusLabel::YouWon);
        assert_eq!(o.status(&history), StatusLabel::YouLost);
        assert_eq!(x.status(&history).text(), "You Won!");
        assert_eq!(o.status(&history).text(), "You Lost!");
    }

    #[test]
    fn test_no_taps_after_game_over() {
        let (_, o) = seats();
        let cells = [0, 3, 1, 4, 2].map(|i| Position::from_index(i).unwrap());
        let mut history = History::replay(&cells).unwrap();

        // O would be on move by parity, but the game is decided.
        assert_eq!(history.to_move(), Player::O);
        assert!(!o.tap(&mut history, Position::BottomRight));
    }
}
