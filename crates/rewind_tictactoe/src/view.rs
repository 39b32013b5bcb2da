//! Serializable read-only projection of a game.

use super::history::HistoryEngine;
use super::moves::StepSummary;
use super::{Board, GameStatus, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw one game.
///
/// Holds copies, never references into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryView {
    /// Every recorded snapshot.
    history: Vec<Board>,
    /// Current step pointer.
    step: usize,
    /// Snapshot at the step pointer.
    current: Board,
    /// Derived status of the current snapshot.
    status: GameStatus,
    /// Current snapshot is full with no winner.
    draw: bool,
    /// Winning triple, if any.
    winning_line: Option<[Position; 3]>,
    /// Move list in chronological order.
    moves: Vec<StepSummary>,
}

impl From<&HistoryEngine> for HistoryView {
    fn from(engine: &HistoryEngine) -> Self {
        Self {
            history: engine.history().to_vec(),
            step: engine.step(),
            current: *engine.current(),
            status: engine.status(),
            draw: engine.is_draw(),
            winning_line: engine.winning_line(),
            moves: engine.moves(),
        }
    }
}
