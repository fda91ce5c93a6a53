//! Game controller.
//!
//! [`Game`] is the thin layer between input events and the core: it turns a
//! cell click into an evaluated, validated history append and derives the
//! status text a renderer shows.

use crate::view::GameView;
use tictactoe_core::rules::{evaluate, is_full};
use tictactoe_core::{GameHistory, HistoryError, Line, Mark, Move, Position, Win};
use tracing::{debug, info, instrument, warn};

/// Status of the snapshot under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {next}")]
    InProgress {
        /// Mark to place next.
        next: Mark,
    },
    /// A line is complete.
    #[display("Winner: {}", _0.mark)]
    Won(Win),
    /// Board full with no line.
    #[display("It is a draw!")]
    Draw,
}

impl GameStatus {
    /// Whether further moves are refused.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won(win) => Some(win.line),
            _ => None,
        }
    }
}

/// Error returned when a click or jump is refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Cell index is not 0-8.
    #[display("Cell {_0} is not on the board")]
    OutOfBounds(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,

    /// The history store refused the request.
    #[display("{_0}")]
    History(HistoryError),
}

impl From<HistoryError> for MoveError {
    fn from(err: HistoryError) -> Self {
        MoveError::History(err)
    }
}

/// Tic-tac-toe game with time travel.
#[derive(Debug, Clone, Default)]
pub struct Game {
    history: GameHistory,
}

impl Game {
    /// Creates a new game with the move list sorted ascending.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: GameHistory::new(),
        }
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort_direction(ascending: bool) -> Self {
        let mut game = Self::new();
        game.history.set_sort_direction(ascending);
        game
    }

    /// Places the next mark at `index` (0-8) on the displayed board.
    ///
    /// Clicks on an occupied cell or a decided board are refused and leave
    /// the game unchanged. A click while viewing the past discards the
    /// moves after the cursor.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn handle_cell_click(&mut self, index: usize) -> Result<Move, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let board = *self.history.current_snapshot();

        if !board.is_empty(position) {
            debug!(%position, "Click on occupied cell ignored");
            return Err(MoveError::SquareOccupied(position));
        }
        if evaluate(&board).is_some() || is_full(&board) {
            debug!("Click on finished board ignored");
            return Err(MoveError::GameOver);
        }

        let next = Move::new(self.history.to_move(), position).apply(&board);
        let mov = self.history.append(next).inspect_err(|e| {
            warn!(error = %e, "History rejected move");
        })?;

        info!(%mov, move_number = self.history.cursor(), "Move played");
        Ok(mov)
    }

    /// Shows the snapshot at `index`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        self.history.jump_to(index)?;
        info!(cursor = index, "Jumped to move");
        Ok(())
    }

    /// Flips the move-list order; returns true when now ascending.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) -> bool {
        let ascending = self.history.toggle_sort();
        debug!(ascending, "Move list order toggled");
        ascending
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        let board = self.history.current_snapshot();
        match evaluate(board) {
            Some(win) => GameStatus::Won(win),
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress {
                next: self.history.to_move(),
            },
        }
    }

    /// Line to highlight, if the displayed snapshot is won.
    pub fn winning_line(&self) -> Option<Line> {
        self.status().winning_line()
    }

    /// `You are at move #n` for the cursor.
    pub fn move_status(&self) -> String {
        format!("You are at move #{}", self.history.cursor())
    }

    /// Caption of the sort toggle.
    pub fn sort_label(&self) -> &'static str {
        if self.history.is_ascending() {
            "Sort history ascending"
        } else {
            "Sort history descending"
        }
    }

    /// The underlying history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Everything a renderer needs for one frame.
    pub fn view(&self) -> GameView {
        GameView::from_game(self)
    }
}
