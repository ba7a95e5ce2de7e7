//! Tabletop tic-tac-toe - two mirrored boards, one game
//!
//! Two players sit on opposite sides of one screen. Each has a board of
//! their own, the far one turned around, and both boards show the same
//! game. A board only accepts taps for its own mark on its own turn.
//!
//! # Architecture
//!
//! - **Engine**: move history, turn owner and outcome ([`History`], [`outcome`])
//! - **Seats**: turn authorization and status lines ([`Seat`])
//! - **Table**: the shared game plus both seats ([`Table`])
//! - **TUI**: ratatui rendering with keyboard and mouse input ([`run_tui`])
//!
//! # Example
//!
//! ```
//! use tabletop_tictactoe::{Position, SeatId, StatusLabel, Table};
//!
//! let mut table = Table::new(true);
//! // O may not open.
//! assert!(!table.tap(SeatId::Bottom, Position::Center));
//! assert!(table.tap(SeatId::Top, Position::Center));
//! assert_eq!(table.status(SeatId::Bottom), StatusLabel::YourTurn);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod report;
mod seat;
mod table;
mod theme;
mod tui;

/// Command-line definitions for the binary.
pub mod cli;

// Crate-level exports - Game engine
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, Contract, GameNotOver, History, HistoryConsistentInvariant,
    HistoryInvariants, Invariant, InvariantSet, InvariantViolation, LINES, LegalMove, Mark,
    MonotonicBoardInvariant, Move, MoveContract, MoveError, Outcome, Player, PlayersTurn,
    Position, Square, SquareIsEmpty, apply_move, check_winner, is_full, outcome, turn_owner,
};

// Crate-level exports - Seats and table
pub use seat::{Orientation, Seat, StatusLabel};
pub use table::{SeatId, Table};

// Crate-level exports - Presentation
pub use config::{ConfigError, TableConfig};
pub use report::ReplayReport;
pub use theme::{Palette, Theme, ThemeChoice, palette};
pub use tui::{
    Action, App, Hit, SeatLayout, Step, TableLayout, action_for_key, cell_borders, draw,
    move_cursor, run_tui, seat_layout, table_layout,
};
