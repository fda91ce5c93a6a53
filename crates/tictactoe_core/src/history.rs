//! Time-travel move history.
//!
//! [`GameHistory`] is an ordered log of board snapshots with a cursor naming
//! the one currently shown. Appending while the cursor sits in the past drops
//! every later snapshot first, so a new move always starts a fresh branch.
//! The store knows nothing about wins or draws; callers consult
//! [`crate::rules::evaluate`] before appending.

use crate::action::Move;
use crate::contracts::{AppendContract, Contract};
use crate::error::HistoryError;
use crate::{Board, Mark};
use serde::Serialize;
use tracing::{debug, instrument};

/// Label of the first entry in the move list.
pub const GAME_START_LABEL: &str = "Go to game start";

/// Snapshot log, cursor and move-list sort flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) cursor: usize,
    ascending: bool,
}

/// One row of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index this row jumps to.
    pub index: usize,
    /// Row text, e.g. `Go to move #2(1,1)`.
    pub label: String,
    /// Whether this row is the snapshot at the cursor.
    pub is_current: bool,
}

impl GameHistory {
    /// Creates a history holding only the empty board, sorted ascending.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
            ascending: true,
        }
    }

    /// Records `next` as the snapshot after the cursor.
    ///
    /// Everything after the cursor is discarded first. `next` must be the
    /// current snapshot plus one mark for the player to move; otherwise the
    /// history is left unchanged and an error is returned.
    #[instrument(skip(self, next), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn append(&mut self, next: Board) -> Result<Move, HistoryError> {
        AppendContract::pre(self, &next)?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        let dropped = self.snapshots.len() - (self.cursor + 1);
        if dropped > 0 {
            debug!(dropped, "Discarding future snapshots");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(e) = AppendContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        let mov = self.move_at(self.cursor)?.ok_or(HistoryError::NotSingleMove)?;
        debug!(%mov, cursor = self.cursor, "Snapshot appended");
        Ok(mov)
    }

    /// Moves the cursor to `index`. The snapshots are untouched.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.check_index(index)?;
        self.cursor = index;
        Ok(())
    }

    /// Snapshot at the cursor.
    pub fn current_snapshot(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Snapshot at `index`.
    pub fn snapshot(&self, index: usize) -> Result<&Board, HistoryError> {
        self.check_index(index)?;
        Ok(&self.snapshots[index])
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The move that produced snapshot `index`; `None` for the start.
    pub fn move_at(&self, index: usize) -> Result<Option<Move>, HistoryError> {
        self.check_index(index)?;
        if index == 0 {
            return Ok(None);
        }
        let after = &self.snapshots[index];
        let before = &self.snapshots[index - 1];
        Ok(after
            .first_new_mark(before)
            .and_then(|pos| after.get(pos).mark().map(|mark| Move::new(mark, pos))))
    }

    /// Move-list text for snapshot `index`.
    ///
    /// Index 0 is [`GAME_START_LABEL`]; later entries read
    /// `Go to move #k(row,col)` with a 1-based coordinate.
    pub fn move_label(&self, index: usize) -> Result<String, HistoryError> {
        Ok(match self.move_at(index)? {
            None if index == 0 => GAME_START_LABEL.to_string(),
            None => format!("Go to move #{index}"),
            Some(mov) => {
                let (row, col) = mov.position.coordinate();
                format!("Go to move #{index}({row},{col})")
            }
        })
    }

    /// Sets the move-list order. Does not touch snapshots or cursor.
    #[instrument(skip(self))]
    pub fn set_sort_direction(&mut self, ascending: bool) {
        self.ascending = ascending;
    }

    /// Flips the move-list order and returns the new setting.
    pub fn toggle_sort(&mut self) -> bool {
        self.set_sort_direction(!self.ascending);
        self.ascending
    }

    /// Whether the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Number of snapshots, including the empty start board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the start snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Mark to place next, derived from the cursor.
    pub fn to_move(&self) -> Mark {
        Mark::for_turn(self.cursor)
    }

    /// Move-list rows in display order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = (0..self.snapshots.len())
            .map(|index| MoveEntry {
                index,
                label: self
                    .move_label(index)
                    .unwrap_or_else(|_| GAME_START_LABEL.to_string()),
                is_current: index == self.cursor,
            })
            .collect();
        if !self.ascending {
            entries.reverse();
        }
        entries
    }

    fn check_index(&self, index: usize) -> Result<(), HistoryError> {
        if index < self.snapshots.len() {
            Ok(())
        } else {
            Err(HistoryError::IndexOutOfRange {
                index,
                len: self.snapshots.len(),
            })
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
