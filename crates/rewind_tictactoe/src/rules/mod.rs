//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a single board snapshot. Rules are kept
//! apart from history so every step of a game can be judged on its own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
