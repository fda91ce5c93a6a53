//! Contract-based validation for history appends.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::Move;
use crate::error::HistoryError;
use crate::history::GameHistory;
use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::Board;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), HistoryError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), HistoryError>;
}

/// Precondition: the snapshot adds exactly one mark to an empty cell.
pub struct SingleMove;

impl SingleMove {
    /// Returns the move `next` makes on top of `current`.
    #[instrument(level = "trace", skip_all)]
    pub fn check(current: &Board, next: &Board) -> Result<Move, HistoryError> {
        Move::between(current, next).ok_or_else(|| {
            warn!(changed = next.diff(current).len(), "Rejected snapshot");
            HistoryError::NotSingleMove
        })
    }
}

/// Precondition: the placed mark belongs to the player to move.
pub struct MarksTurn;

impl MarksTurn {
    /// Validates `mov` against the history's turn parity.
    #[instrument(level = "trace", skip(history))]
    pub fn check(mov: &Move, history: &GameHistory) -> Result<(), HistoryError> {
        let expected = history.to_move();
        if mov.mark != expected {
            Err(HistoryError::WrongMark {
                expected,
                found: mov.mark,
            })
        } else {
            Ok(())
        }
    }
}

/// Contract for appending a snapshot.
///
/// Preconditions:
/// - Exactly one previously empty cell is filled
/// - The mark matches the cursor's parity
///
/// Postconditions:
/// - All [`TimelineInvariants`] hold
/// - The cursor sits on the new last snapshot
pub struct AppendContract;

impl Contract<GameHistory, Board> for AppendContract {
    fn pre(history: &GameHistory, next: &Board) -> Result<(), HistoryError> {
        let mov = SingleMove::check(history.current_snapshot(), next)?;
        MarksTurn::check(&mov, history)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), HistoryError> {
        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HistoryError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if after.cursor() != after.len() - 1 || after.len() != before.cursor() + 2 {
            return Err(HistoryError::InvariantViolation(format!(
                "Append left cursor {} in history of length {}",
                after.cursor(),
                after.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_precondition_empty_cell() {
        let history = GameHistory::new();
        let next = Board::new().with_mark(Position::Center, Mark::X);
        assert!(AppendContract::pre(&history, &next).is_ok());
    }

    #[test]
    fn test_precondition_unchanged_board() {
        let history = GameHistory::new();
        assert_eq!(
            AppendContract::pre(&history, &Board::new()),
            Err(HistoryError::NotSingleMove)
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let history = GameHistory::new();
        let next = Board::new().with_mark(Position::Center, Mark::O);
        assert!(matches!(
            AppendContract::pre(&history, &next),
            Err(HistoryError::WrongMark { expected: Mark::X, found: Mark::O })
        ));
    }

    #[test]
    fn test_postcondition_holds_after_append() {
        let before = GameHistory::new();
        let mut after = before.clone();
        after
            .append(Board::new().with_mark(Position::Center, Mark::X))
            .unwrap();
        assert!(AppendContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameHistory::new();
        let mut after = before.clone();
        after
            .append(Board::new().with_mark(Position::Center, Mark::X))
            .unwrap();

        // Sneak a second mark into the latest snapshot.
        after.snapshots[1].set(Position::TopLeft, crate::Cell::Occupied(Mark::O));
        assert!(AppendContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_stale_cursor() {
        let before = GameHistory::new();
        let mut after = before.clone();
        after
            .append(Board::new().with_mark(Position::Center, Mark::X))
            .unwrap();
        after.cursor = 0;
        assert!(AppendContract::post(&before, &after).is_err());
    }
}
