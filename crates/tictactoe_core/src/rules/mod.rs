//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules know nothing about history
//! or turn order, so the same checks serve the move guard and the display.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{evaluate, Line, Win, LINES};
