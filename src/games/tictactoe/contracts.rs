//! Contract-based validation for tic-tac-toe.
//!
//! Contracts pair the preconditions a move must meet with the
//! postconditions the history must satisfy once it has been applied.

use super::action::{Move, MoveError};
use super::history::History;
use super::invariants::{HistoryInvariants, InvariantSet};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the displayed board has no outcome yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the precondition.
    #[instrument(level = "trace", skip(history))]
    pub fn check(history: &History) -> Result<(), MoveError> {
        if history.outcome().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    #[instrument(level = "trace", skip(history))]
    pub fn check(mov: &Move, history: &History) -> Result<(), MoveError> {
        if history.current_board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the precondition.
    #[instrument(level = "trace", skip(history))]
    pub fn check(mov: &Move, history: &History) -> Result<(), MoveError> {
        if mov.player == history.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.player))
        }
    }
}

/// Composite precondition: a move is legal if the game is live, the
/// square is empty and it's the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "trace", skip(history))]
    pub fn check(mov: &Move, history: &History) -> Result<(), MoveError> {
        GameNotOver::check(history)?;
        SquareIsEmpty::check(mov, history)?;
        PlayersTurn::check(mov, history)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Postconditions: the history invariants hold and the cursor sits one
/// past where it was before the move.
pub struct MoveContract;

impl Contract<History, Move> for MoveContract {
    fn pre(history: &History, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, history)
    }

    fn post(before: &History, after: &History) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if after.current_move() != before.current_move() + 1
            || after.len() != before.current_move() + 2
        {
            return Err(MoveError::InvariantViolation(
                "Move did not truncate and append exactly one snapshot".to_string(),
            ));
        }
        Ok(())
    }
}
