//! Step consistency invariant: each step adds exactly one mark, alternating.

use super::super::{Board, HistoryEngine, Player, Position, Square};
use super::Invariant;

/// Invariant: every snapshot differs from its predecessor in exactly one
/// square, which goes from empty to the mark of the player whose turn it
/// was at the predecessor's step.
///
/// Together this makes the board monotonic (squares are never overwritten)
/// and players alternate X, O, X, ...
pub struct SingleMarkPerStepInvariant;

fn step_is_single_mark(step: usize, before: &Board, after: &Board) -> bool {
    let mut changed = Position::ALL
        .iter()
        .filter(|pos| before.get(**pos) != after.get(**pos));

    match (changed.next(), changed.next()) {
        (Some(pos), None) => {
            before.is_empty(*pos) && after.get(*pos) == Square::Occupied(Player::for_step(step))
        }
        _ => false,
    }
}

impl Invariant<HistoryEngine> for SingleMarkPerStepInvariant {
    fn holds(engine: &HistoryEngine) -> bool {
        engine
            .history
            .windows(2)
            .enumerate()
            .all(|(step, pair)| step_is_single_mark(step, &pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each step places exactly one mark, alternating X and O"
    }
}
