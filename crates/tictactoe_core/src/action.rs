//! First-class move type for tic-tac-toe.
//!
//! A move is the single-cell difference between two consecutive snapshots.

use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Recovers the move that turns `before` into `after`.
    ///
    /// Returns `None` unless exactly one cell changed and it went from
    /// empty to occupied.
    #[instrument(level = "trace", skip(before, after))]
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        match after.diff(before).as_slice() {
            [position] if before.is_empty(*position) => after
                .get(*position)
                .mark()
                .map(|mark| Move::new(mark, *position)),
            _ => None,
        }
    }

    /// Applies this move to `board`, producing the next snapshot.
    pub fn apply(&self, board: &Board) -> Board {
        board.with_mark(self.position, self.mark)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}
