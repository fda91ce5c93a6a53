//! Single-step invariant: consecutive snapshots differ by one new mark.

use super::Invariant;
use crate::{GameHistory, Move};

/// Invariant: each snapshot adds exactly one mark to a previously empty cell.
pub struct SingleStepInvariant;

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots
            .windows(2)
            .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty cell"
    }
}
