//! Step pointer invariant: the pointer always selects a recorded snapshot.

use super::super::HistoryEngine;
use super::Invariant;

/// Invariant: `0 <= step < history.len()`, which also implies a non-empty
/// history.
pub struct StepInBoundsInvariant;

impl Invariant<HistoryEngine> for StepInBoundsInvariant {
    fn holds(engine: &HistoryEngine) -> bool {
        engine.step < engine.history.len()
    }

    fn description() -> &'static str {
        "Step pointer selects a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_holds() {
        assert!(StepInBoundsInvariant::holds(&HistoryEngine::new()));
    }

    #[test]
    fn test_pointer_past_end_violates() {
        let mut engine = HistoryEngine::replay(&[0, 1]).unwrap();
        engine.step = 3;
        assert!(!StepInBoundsInvariant::holds(&engine));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut engine = HistoryEngine::new();
        engine.history.clear();
        assert!(!StepInBoundsInvariant::holds(&engine));
    }
}
