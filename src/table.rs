//! The table: one shared game and the two seats around it.

use crate::games::tictactoe::{History, Outcome, Player, Position};
use crate::seat::{Orientation, Seat, StatusLabel};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which side of the screen a seat sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatId {
    /// Upper half of the screen. Plays X.
    Top,
    /// Lower half of the screen. Plays O.
    Bottom,
}

impl SeatId {
    /// Both seats, top first.
    pub const BOTH: [SeatId; 2] = [SeatId::Top, SeatId::Bottom];
}

/// Top-level game model owning the single history both seats read.
#[derive(Debug, Clone, Getters)]
pub struct Table {
    history: History,
    top: Seat,
    bottom: Seat,
}

impl Table {
    /// Creates a table with a fresh game.
    ///
    /// With `mirror_top` the top seat's board is turned 180°.
    #[instrument]
    pub fn new(mirror_top: bool) -> Self {
        let top_orientation = if mirror_top {
            Orientation::Flipped
        } else {
            Orientation::Upright
        };
        Self {
            history: History::new(),
            top: Seat::new(Player::X, top_orientation),
            bottom: Seat::new(Player::O, Orientation::Upright),
        }
    }

    /// Seats a table around an existing history.
    #[instrument(skip(history), fields(current = history.current_move()))]
    pub fn from_history(history: History, mirror_top: bool) -> Self {
        Self {
            history,
            ..Self::new(mirror_top)
        }
    }

    /// The seat at `id`.
    pub fn seat(&self, id: SeatId) -> &Seat {
        match id {
            SeatId::Top => &self.top,
            SeatId::Bottom => &self.bottom,
        }
    }

    /// Routes a tap on `pos` through seat `id`. Returns whether it applied.
    #[instrument(skip(self))]
    pub fn tap(&mut self, id: SeatId, pos: Position) -> bool {
        let seat = *self.seat(id);
        seat.tap(&mut self.history, pos)
    }

    /// Outcome of the board on display.
    pub fn outcome(&self) -> Outcome {
        self.history.outcome()
    }

    /// Status line for seat `id`.
    pub fn status(&self, id: SeatId) -> StatusLabel {
        self.seat(id).status(&self.history)
    }

    /// Whether the Play Again control is shown.
    pub fn reset_visible(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Starts over from the empty board, only once the game has ended.
    ///
    /// Returns whether the reset happened.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) -> bool {
        if !self.reset_visible() {
            debug!("Play again ignored while game is in progress");
            return false;
        }
        info!(outcome = %self.outcome(), "Starting a new game");
        self.history.reset();
        true
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(true)
    }
}
