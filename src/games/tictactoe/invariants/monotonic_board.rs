//! Monotonic board invariant: squares never change once set.

use super::super::{History, Square};
use super::Invariant;

/// Invariant: snapshots only ever gain marks.
///
/// The first snapshot is empty, and every occupied square of a snapshot
/// is occupied by the same player in the snapshot after it.
pub struct MonotonicBoardInvariant;

impl Invariant<History> for MonotonicBoardInvariant {
    fn holds(history: &History) -> bool {
        let snapshots = history.snapshots();
        let Some(first) = snapshots.first() else {
            return false;
        };
        if first.occupied() != 0 {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .all(|(before, after)| *before == Square::Empty || before == after)
        })
    }

    fn description() -> &'static str {
        "Board squares never change once occupied"
    }
}
