//! Move history for a single shared game.
//!
//! The history is a list of board snapshots starting from the empty
//! board, plus a cursor selecting the snapshot on display. The turn
//! owner and outcome are always derived from that snapshot.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::{self, turn_owner};
use super::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Snapshots of every board reached so far, and the one on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) current: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Every snapshot, index 0 being the empty board.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of snapshots held, including ones past the current move.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the empty board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// The board on display.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// The player whose move is legal now.
    pub fn to_move(&self) -> Player {
        turn_owner(self.current)
    }

    /// Outcome of the board on display, computed fresh.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(self.current_board())
    }

    /// Applies a move to the board on display.
    ///
    /// Snapshots past the current move are dropped before the new board is
    /// appended, and the cursor moves to the new end.
    ///
    /// # Errors
    ///
    /// Any failed precondition of [`MoveContract`]. In debug builds a
    /// broken postcondition surfaces as `MoveError::InvariantViolation`.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn play(&mut self, action: Move) -> Result<(), MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        MoveContract::pre(self, &action)?;
        let next = rules::apply_move(self.current_board(), action.position, action.player)?;

        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        info!(move_number = self.current, outcome = %self.outcome(), "Move applied");
        Ok(())
    }

    /// Moves the cursor to snapshot `move_number`.
    ///
    /// Later snapshots are kept until the next move replaces them.
    ///
    /// # Errors
    ///
    /// `MoveError::OutOfBounds` if no such snapshot exists.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), MoveError> {
        if move_number >= self.snapshots.len() {
            return Err(MoveError::OutOfBounds(move_number));
        }
        debug!(from = self.current, to = move_number, "Jumping in history");
        self.current = move_number;
        Ok(())
    }

    /// Returns to the empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.current = 0;
        info!(kept_snapshots = self.snapshots.len(), "History reset to empty board");
    }

    /// Builds a history by playing `positions` in order, X first.
    ///
    /// # Errors
    ///
    /// The first illegal move stops the replay and its error is returned.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for position in positions {
            history.play(Move::new(history.to_move(), *position))?;
        }
        Ok(history)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn positions(cells: &[usize]) -> Vec<Position> {
        cells
            .iter()
            .map(|i| Position::from_index(*i).unwrap())
            .collect()
    }

    #[test]
    fn test_new_history_is_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.to_move(), Player::X);
        assert_eq!(history.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_play_appends_snapshot() {
        let mut history = History::new();
        history.play(Move::new(Player::X, Position::Center)).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.current_move(), 1);
        assert_eq!(history.to_move(), Player::O);
        assert_eq!(
            history.current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(history.snapshots()[0], Board::new());
    }

    #[test]
    fn test_rejected_move_leaves_history_untouched() {
        let mut history = History::replay(&positions(&[4])).unwrap();
        let before = history.clone();

        assert_eq!(
            history.play(Move::new(Player::X, Position::TopLeft)),
            Err(MoveError::WrongPlayer(Player::X))
        );
        assert_eq!(
            history.play(Move::new(Player::O, Position::Center)),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_play_after_jump_truncates_future() {
        let mut history = History::replay(&positions(&[0, 3, 1])).unwrap();
        history.jump_to(1).unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history.to_move(), Player::O);

        history.play(Move::new(Player::O, Position::BottomRight)).unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_move(), 2);
        assert!(history.current_board().is_empty(Position::MiddleLeft));
    }

    #[test]
    fn test_jump_out_of_bounds() {
        let mut history = History::new();
        assert_eq!(history.jump_to(1), Err(MoveError::OutOfBounds(1)));
        assert_eq!(history.current_move(), 0);
    }

    #[test]
    fn test_reset_then_move_lands_at_index_one() {
        let mut history = History::replay(&positions(&[0, 3, 1, 4, 2])).unwrap();
        assert_eq!(history.outcome(), Outcome::Winner(Player::X));

        history.reset();
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.outcome(), Outcome::InProgress);

        history.play(Move::new(Player::X, Position::Center)).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_move(), 1);
        assert_eq!(history.current_board().occupied(), 1);
    }

    #[test]
    fn test_replay_stops_at_first_illegal_move() {
        assert_eq!(
            History::replay(&positions(&[0, 0])),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(
            History::replay(&positions(&[0, 3, 1, 4, 2, 5])),
            Err(MoveError::GameOver)
        );
    }
}
