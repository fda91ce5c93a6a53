//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Mark to place when `moves_made` moves are already on the board.
    ///
    /// X moves on even counts, O on odd counts.
    pub fn for_turn(moves_made: usize) -> Self {
        if moves_made % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board snapshot.
///
/// Cells are stored row-major, so index `i` is row `i / 3`, column `i % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from raw cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// Does not check that the cell was empty; callers validate first.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.set(pos, Cell::Occupied(mark));
        next
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// First position (scanning 0..9) empty in `previous` and occupied here.
    pub fn first_new_mark(&self, previous: &Board) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| previous.is_empty(*pos) && !self.is_empty(*pos))
    }

    /// Positions whose cells differ between `self` and `other`.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_parity() {
        assert_eq!(Mark::for_turn(0), Mark::X);
        assert_eq!(Mark::for_turn(1), Mark::O);
        assert_eq!(Mark::for_turn(2), Mark::X);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Mark::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(next.diff(&board), vec![Position::Center]);
    }

    #[test]
    fn test_first_new_mark() {
        let before = Board::new().with_mark(Position::TopLeft, Mark::X);
        let after = before.with_mark(Position::BottomRight, Mark::O);
        assert_eq!(after.first_new_mark(&before), Some(Position::BottomRight));
        assert_eq!(before.first_new_mark(&before), None);
    }
}
