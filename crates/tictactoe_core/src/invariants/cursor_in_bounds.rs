//! Cursor invariant: the cursor names an existing snapshot.

use super::Invariant;
use crate::GameHistory;

/// Invariant: `cursor < len`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.cursor < history.snapshots.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}
