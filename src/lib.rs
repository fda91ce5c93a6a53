//! Tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Core** ([`tictactoe_core`]): board evaluation and the snapshot history.
//! - **Game**: the controller turning clicks and jumps into core calls.
//! - **View**: the serializable frame a renderer draws.
//! - **Shell**: a line-oriented frontend over any reader and writer.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! for cell in [0, 4, 1, 8, 2] {
//!     game.handle_cell_click(cell)?;
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.jump_to(1)?;
//! assert!(matches!(game.status(), GameStatus::InProgress { .. }));
//! # Ok::<(), tictactoe_timeline::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;
mod shell;
mod view;

pub use config::{AppConfig, ConfigError, OutputFormat};
pub use game::{Game, GameStatus, MoveError};
pub use shell::{write_frame, Command, ParseCommandError, Shell, Verb, HELP};
pub use view::{CellView, GameView};

pub use tictactoe_core::{
    evaluate, Board, Cell, GameHistory, HistoryError, Line, Mark, Move, MoveEntry, Position,
    Win, GAME_START_LABEL, LINES,
};
