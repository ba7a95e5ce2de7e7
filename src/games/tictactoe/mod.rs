//! Tic-tac-toe game state engine.

mod action;
mod contracts;
mod history;
pub mod invariants;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use history::History;
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use position::Position;
pub use rules::{LINES, apply_move, check_winner, is_full, outcome, turn_owner};
pub use types::{Board, Outcome, Player, Square};

/// Alias for clarity at the table: the symbol a seat places.
pub type Mark = Player;
