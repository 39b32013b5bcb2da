//! Tic-tac-toe game state with move history and time travel.
//!
//! A [`HistoryEngine`] keeps every board snapshot of a game and a step
//! pointer into them. Moves append snapshots, jumps move the pointer, and a
//! move made after a jump discards the abandoned future. Whose turn it is
//! is always derived from the step pointer's parity.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameStatus, HistoryEngine, Player};
//!
//! let mut game = HistoryEngine::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     game.apply_move(cell)?;
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Player::X));
//!
//! game.jump_to(2)?;
//! assert_eq!(game.status(), GameStatus::NextToMove(Player::X));
//! assert_eq!(game.len(), 6);
//!
//! game.apply_move(7)?;
//! assert_eq!(game.len(), 4);
//! # Ok::<(), rewind_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod history;
pub mod invariants;
mod moves;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{GameError, Move};
pub use history::HistoryEngine;
pub use moves::{MoveOrder, StepSummary, placed_move};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
pub use view::HistoryView;
