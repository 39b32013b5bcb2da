//! First-class invariants for the history engine.
//!
//! Invariants are logical properties that must hold after every command.
//! They are testable independently and checked as move postconditions in
//! debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

pub mod single_mark_per_step;
pub mod starts_empty;
pub mod step_in_bounds;

pub use single_mark_per_step::SingleMarkPerStepInvariant;
pub use starts_empty::StartsEmptyInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All history engine invariants as a composable set.
pub type HistoryInvariants = (
    StepInBoundsInvariant,
    StartsEmptyInvariant,
    SingleMarkPerStepInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryEngine};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = HistoryEngine::new();
        assert!(HistoryInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut engine = HistoryEngine::replay(&[4, 0, 8]).unwrap();
        assert!(HistoryInvariants::check_all(&engine).is_ok());

        engine.jump_to(1).unwrap();
        assert!(HistoryInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = HistoryEngine::replay(&[4]).unwrap();
        engine.history[0] = engine.history[1];
        engine.step = 5;

        let violations = HistoryInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (StepInBoundsInvariant, StartsEmptyInvariant);

        let mut engine = HistoryEngine::new();
        assert!(TwoInvariants::check_all(&engine).is_ok());

        engine.history.clear();
        engine.history.push(Board::new());
        engine.step = 1;
        assert_eq!(TwoInvariants::check_all(&engine).unwrap_err().len(), 1);
    }
}
