//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Three positions forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The positions on this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices on this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// All winning lines, in evaluation order.
///
/// Rows top to bottom, columns left to right, then the main diagonal
/// and the anti-diagonal. The first match wins ties.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The winning mark.
    pub mark: Mark,
    /// The completed line.
    pub line: Line,
}

/// Checks the board for three in a row.
///
/// Returns the first completed line in [`LINES`] order, or `None`. A full
/// board with no line also returns `None`; see [`super::is_draw`].
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line.positions();
        let cell = board.get(a);
        if let Cell::Occupied(mark) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            trace!(?mark, ?line, "Line completed");
            return Some(Win { mark, line });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, positions: [Position; 3]) -> Board {
        positions
            .into_iter()
            .fold(Board::new(), |board, pos| board.with_mark(pos, mark))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_every_line_detected_for_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for line in LINES {
                let board = board_with(mark, line.positions());
                assert_eq!(evaluate(&board), Some(Win { mark, line }), "{line:?}");
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::X)
            .with_mark(Position::TopRight, Mark::O);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_rows_take_precedence_over_columns() {
        // X fills the top row and the left column.
        let board = board_with(Mark::X, [Position::TopLeft, Position::TopCenter, Position::TopRight])
            .with_mark(Position::MiddleLeft, Mark::X)
            .with_mark(Position::BottomLeft, Mark::X);
        assert_eq!(evaluate(&board).map(|w| w.line), Some(LINES[0]));
    }

    #[test]
    fn test_main_diagonal_before_anti_diagonal() {
        let board = board_with(Mark::O, [Position::TopLeft, Position::Center, Position::BottomRight])
            .with_mark(Position::TopRight, Mark::O)
            .with_mark(Position::BottomLeft, Mark::O);
        assert_eq!(evaluate(&board).map(|w| w.line), Some(LINES[6]));
    }

    #[test]
    fn test_line_indices() {
        assert_eq!(LINES[7].indices(), [2, 4, 6]);
        assert!(LINES[4].contains(Position::Center));
    }
}
