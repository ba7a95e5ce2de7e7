//! Game rules for tic-tac-toe.
//!
//! Pure functions over boards. Nothing here holds state, so every
//! caller recomputes the outcome from the board it is looking at.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::action::MoveError;
use super::{Board, Outcome, Player, Position, Square};
use tracing::instrument;

/// Derives the outcome of a board.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Winner(winner)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

/// The player whose move it is after `move_number` moves.
pub fn turn_owner(move_number: usize) -> Player {
    if move_number % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// Places `player` at `pos`, returning the resulting board.
///
/// The input board is left as it was.
///
/// # Errors
///
/// - `MoveError::GameOver` if the board already has an outcome.
/// - `MoveError::SquareOccupied` if `pos` is taken.
#[instrument(level = "debug", skip_all, fields(position = %pos, player = %player))]
pub fn apply_move(board: &Board, pos: Position, player: Player) -> Result<Board, MoveError> {
    if outcome(board).is_terminal() {
        return Err(MoveError::GameOver);
    }
    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }
    Ok(board.with(pos, Square::Occupied(player)))
}
