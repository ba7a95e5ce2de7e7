//! History consistency invariant: snapshot index matches mark count.

use super::super::History;
use super::Invariant;

/// Invariant: snapshot `i` holds exactly `i` marks, and the current move
/// points inside the history.
pub struct HistoryConsistentInvariant;

impl Invariant<History> for HistoryConsistentInvariant {
    fn holds(history: &History) -> bool {
        let counts_match = history
            .snapshots()
            .iter()
            .enumerate()
            .all(|(i, board)| board.occupied() == i);

        counts_match && history.current_move() < history.len()
    }

    fn description() -> &'static str {
        "Snapshot index equals number of occupied squares and current move is in bounds"
    }
}
