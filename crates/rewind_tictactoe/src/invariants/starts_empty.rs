//! Start invariant: the first snapshot is the empty board.

use super::super::{Board, HistoryEngine};
use super::Invariant;

/// Invariant: `history[0]` is the empty board (game start).
pub struct StartsEmptyInvariant;

impl Invariant<HistoryEngine> for StartsEmptyInvariant {
    fn holds(engine: &HistoryEngine) -> bool {
        engine.history.first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_engine_holds() {
        assert!(StartsEmptyInvariant::holds(&HistoryEngine::new()));
    }

    #[test]
    fn test_marked_start_violates() {
        let mut engine = HistoryEngine::new();
        engine.history[0] = Board::new().with_mark(Position::Center, Player::X);
        assert!(!StartsEmptyInvariant::holds(&engine));
    }
}
