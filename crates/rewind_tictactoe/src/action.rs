//! First-class action types for tic-tac-toe.
//!
//! A move is a domain event: which player marked which square. Moves are
//! not stored by the history engine (it stores boards) but are recovered
//! from consecutive snapshots for display and replay.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at ({}, {})",
            self.player,
            self.position.row() + 1,
            self.position.col() + 1
        )
    }
}

/// Reason a command was rejected by the game engine.
///
/// Every variant is recoverable: the engine state is untouched when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The current snapshot already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// Cell index outside 0-8.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    CellOutOfBounds(usize),

    /// Time-travel target outside the recorded history.
    #[display("Step {} does not exist (history has {} steps)", step, len)]
    InvalidStep {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
