//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameHistory, Mark};

/// Invariant: the mark added at snapshot `k` is X for odd `k`, O for even `k`.
///
/// First move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        (1..history.snapshots.len()).all(|k| match history.move_at(k) {
            Ok(Some(mov)) => mov.mark == Mark::for_turn(k - 1),
            _ => false,
        })
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
