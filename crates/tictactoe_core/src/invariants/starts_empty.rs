//! Start invariant: the first snapshot is the empty board.

use super::Invariant;
use crate::{Board, GameHistory};

/// Invariant: history is non-empty and begins with the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<GameHistory> for StartsEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots.first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
