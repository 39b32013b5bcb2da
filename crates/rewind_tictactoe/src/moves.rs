//! Move list projection: one entry per history step, for a time-travel menu.

use super::action::Move;
use super::{Board, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Ordering of a move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest step first.
    Descending,
}

impl MoveOrder {
    /// Returns the other ordering.
    pub fn toggled(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// One step of recorded history as shown in a move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct StepSummary {
    /// Index into history.
    step: usize,
    /// The move that produced this step; `None` for game start.
    placed: Option<Move>,
    /// Whether the step pointer currently selects this step.
    is_current: bool,
}

impl StepSummary {
    /// Jump-target label: "Go to game start" or "Go to move #n: X at (r, c)".
    pub fn description(&self) -> String {
        match self.placed {
            Some(mv) => format!("Go to move #{}: {}", self.step, mv),
            None => "Go to game start".to_string(),
        }
    }
}

impl std::fmt::Display for StepSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.is_current { ">" } else { " " };
        write!(f, "{} {:>2}. {}", marker, self.step, self.description())
    }
}

/// Recovers the move between two consecutive snapshots.
///
/// Returns `None` unless exactly one square went from empty to occupied.
pub fn placed_move(before: &Board, after: &Board) -> Option<Move> {
    let mut changed = Position::ALL
        .iter()
        .copied()
        .filter(|pos| before.get(*pos) != after.get(*pos));

    match (changed.next(), changed.next()) {
        (Some(pos), None) if before.is_empty(pos) => {
            after.get(pos).player().map(|player| Move::new(player, pos))
        }
        _ => None,
    }
}

/// Builds the move list for a history and step pointer.
pub(crate) fn summarize(history: &[Board], current: usize, order: MoveOrder) -> Vec<StepSummary> {
    let mut entries: Vec<StepSummary> = history
        .iter()
        .enumerate()
        .map(|(step, board)| {
            let placed = step
                .checked_sub(1)
                .and_then(|prev| placed_move(&history[prev], board));
            StepSummary::new(step, placed, step == current)
        })
        .collect();

    if order == MoveOrder::Descending {
        entries.reverse();
    }
    entries
}
