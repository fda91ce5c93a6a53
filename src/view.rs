//! Render-ready snapshot of a game.
//!
//! A [`GameView`] is plain data: every string and flag a frontend needs to
//! draw one frame. The text form printed by the shell is its `Display`.

use crate::game::Game;
use serde::Serialize;
use tictactoe_core::{Mark, MoveEntry, Position};

/// One board cell as drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Board index (0-8).
    pub index: usize,
    /// Mark in the cell, if any.
    pub mark: Option<Mark>,
    /// Part of the winning line.
    pub highlighted: bool,
}

/// One frame of the game UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// The nine cells, row-major.
    pub cells: Vec<CellView>,
    /// `Winner: X`, `Next player: O` or `It is a draw!`.
    pub status: String,
    /// `You are at move #n`.
    pub move_status: String,
    /// Caption of the sort toggle.
    pub sort_label: String,
    /// Move-list order.
    pub ascending: bool,
    /// Index of the displayed snapshot.
    pub cursor: usize,
    /// Move-list rows in display order.
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    /// Builds the frame for the game's current state.
    pub fn from_game(game: &Game) -> Self {
        let history = game.history();
        let board = history.current_snapshot();
        let line = game.winning_line();

        let cells = Position::ALL
            .into_iter()
            .map(|pos| CellView {
                index: pos.to_index(),
                mark: board.get(pos).mark(),
                highlighted: line.is_some_and(|l| l.contains(pos)),
            })
            .collect();

        Self {
            cells,
            status: game.status().to_string(),
            move_status: game.move_status(),
            sort_label: game.sort_label().to_string(),
            ascending: history.is_ascending(),
            cursor: history.cursor(),
            moves: history.move_list(),
        }
    }

    /// List numbers in display order.
    ///
    /// Descending lists count down, like a reversed ordered list.
    pub fn list_numbers(&self) -> Vec<usize> {
        let n = self.moves.len();
        if self.ascending {
            (1..=n).collect()
        } else {
            (1..=n).rev().collect()
        }
    }

    fn cell_text(cell: &CellView) -> String {
        match (cell.mark, cell.highlighted) {
            (Some(mark), true) => format!("[{mark}]"),
            (Some(mark), false) => format!(" {mark} "),
            (None, _) => format!(" {} ", cell.index),
        }
    }
}

impl std::fmt::Display for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.move_status)?;
        writeln!(f, "{}", self.status)?;
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            let text: Vec<String> = chunk.iter().map(Self::cell_text).collect();
            writeln!(f, "{}", text.join("|"))?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "{}", self.sort_label)?;
        for (number, entry) in self.list_numbers().into_iter().zip(&self.moves) {
            let marker = if entry.is_current { '>' } else { ' ' };
            writeln!(f, "{marker} {number}. {}", entry.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_view() {
        let view = Game::new().view();
        assert_eq!(view.cells.len(), 9);
        assert!(view.cells.iter().all(|c| c.mark.is_none() && !c.highlighted));
        assert_eq!(view.status, "Next player: X");
        assert_eq!(view.move_status, "You are at move #0");
        assert_eq!(view.moves.len(), 1);
        assert!(view.moves[0].is_current);
    }

    #[test]
    fn test_winning_cells_highlighted() {
        let mut game = Game::new();
        for cell in [2, 0, 4, 1, 6] {
            game.handle_cell_click(cell).unwrap();
        }
        let view = game.view();
        let highlighted: Vec<usize> = view
            .cells
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.index)
            .collect();
        assert_eq!(highlighted, vec![2, 4, 6]);
    }

    #[test]
    fn test_descending_numbers_count_down() {
        let mut game = Game::new();
        game.handle_cell_click(4).unwrap();
        game.handle_cell_click(0).unwrap();
        game.toggle_sort();

        let view = game.view();
        assert_eq!(view.list_numbers(), vec![3, 2, 1]);
        assert_eq!(view.moves[0].label, "Go to move #2(1,1)");
        assert_eq!(view.moves[2].label, "Go to game start");
    }

    #[test]
    fn test_text_frame() {
        let mut game = Game::new();
        game.handle_cell_click(4).unwrap();
        let text = game.view().to_string();
        let expected = "\
You are at move #1
Next player: O
 0 | 1 | 2
---+---+---
 3 | X | 5
---+---+---
 6 | 7 | 8

Sort history ascending
  1. Go to game start
> 2. Go to move #1(2,2)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_frame() {
        let view = Game::new().view();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], "Next player: X");
        assert_eq!(json["cells"][4]["mark"], serde_json::Value::Null);
        assert_eq!(json["moves"][0]["label"], "Go to game start");
    }
}
