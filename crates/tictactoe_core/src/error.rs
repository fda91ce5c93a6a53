//! History store errors.

use crate::Mark;

/// Error returned by [`crate::GameHistory`] operations.
///
/// The store is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// Index does not name a snapshot in the history.
    #[display("History index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the call.
        len: usize,
    },

    /// Snapshot is not the current one plus exactly one newly filled cell.
    #[display("Snapshot does not add exactly one mark to the current board")]
    NotSingleMove,

    /// Snapshot places the wrong mark for the turn.
    #[display("Expected {expected} to move, found {found}")]
    WrongMark {
        /// Mark whose turn it is.
        expected: Mark,
        /// Mark that was placed.
        found: Mark,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}
