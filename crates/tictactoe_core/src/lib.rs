//! Tic-tac-toe rules and time-travel history.
//!
//! Two pieces, both free of any UI concern:
//!
//! - **Board evaluation** ([`rules::evaluate`]): scans the eight lines of a
//!   snapshot and reports the first completed one.
//! - **Game history** ([`GameHistory`]): the ordered log of snapshots, the
//!   cursor into it, and the move-list sort flag.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{rules, GameHistory, Mark, Position};
//!
//! let mut history = GameHistory::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::BottomLeft, Position::TopRight] {
//!     let next = history.current_snapshot().with_mark(pos, history.to_move());
//!     history.append(next)?;
//! }
//!
//! let win = rules::evaluate(history.current_snapshot()).expect("top row");
//! assert_eq!(win.mark, Mark::X);
//!
//! history.jump_to(2)?;
//! assert_eq!(history.move_label(2)?, "Go to move #2(2,2)");
//! # Ok::<(), tictactoe_core::HistoryError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use error::HistoryError;
pub use history::{GameHistory, MoveEntry, GAME_START_LABEL};
pub use position::Position;
pub use rules::{evaluate, Line, Win, LINES};
pub use types::{Board, Cell, Mark};
