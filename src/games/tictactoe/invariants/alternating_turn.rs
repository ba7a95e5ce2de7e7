//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{History, Square, turn_owner};
use super::Invariant;

/// Invariant: each snapshot adds exactly one mark, placed by the turn owner.
///
/// Snapshot `i + 1` differs from snapshot `i` in a single square, which
/// went from empty to the marker of `turn_owner(i)`.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let mut changed = pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after);

                match (changed.next(), changed.next()) {
                    (Some((Square::Empty, after)), None) => {
                        *after == Square::Occupied(turn_owner(i))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each move adds one mark for the player whose turn it was"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_alternating_history_holds() {
        let history = History::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .unwrap();
        assert!(AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut history = History::replay(&[Position::TopLeft, Position::Center]).unwrap();
        history.snapshots[2] = history.snapshots[1]
            .with(Position::Center, Square::Occupied(Player::X));
        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_duplicate_snapshot_violates() {
        let mut history = History::replay(&[Position::TopLeft]).unwrap();
        history.snapshots[1] = history.snapshots[0];
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
