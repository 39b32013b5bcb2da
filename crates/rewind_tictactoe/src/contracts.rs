//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. Preconditions
//! decide whether a move is accepted; postconditions verify that the
//! resulting history still satisfies every engine invariant.

use super::action::GameError;
use super::history::HistoryEngine;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The current snapshot has no winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`GameError::GameOver`] when the current snapshot is won.
    #[instrument(skip(engine))]
    pub fn check(engine: &HistoryEngine) -> Result<(), GameError> {
        match rules::check_winner(engine.current()) {
            Some(winner) => Err(GameError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: The target square is empty in the current snapshot.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with [`GameError::CellOccupied`] when the square is taken.
    #[instrument(skip(engine))]
    pub fn check(position: Position, engine: &HistoryEngine) -> Result<(), GameError> {
        if engine.current().is_empty(position) {
            Ok(())
        } else {
            Err(GameError::CellOccupied(position))
        }
    }
}

/// Composite precondition: a move is legal if the game is not won and the
/// square is empty, checked in that order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine))]
    pub fn check(position: Position, engine: &HistoryEngine) -> Result<(), GameError> {
        GameNotOver::check(engine)?;
        SquareIsEmpty::check(position, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - No winner on the current snapshot
/// - Square must be empty
///
/// Postconditions:
/// - History was cut at the old step and grew by exactly one snapshot
/// - Step pointer points at the new snapshot
/// - All [`HistoryInvariants`] hold
pub struct MoveContract;

impl Contract<HistoryEngine, Position> for MoveContract {
    fn pre(engine: &HistoryEngine, position: &Position) -> Result<(), GameError> {
        LegalMove::check(*position, engine)
    }

    fn post(before: &HistoryEngine, after: &HistoryEngine) -> Result<(), GameError> {
        let expected_step = before.step() + 1;
        if after.step() != expected_step || after.len() != expected_step + 1 {
            warn!(
                before_step = before.step(),
                after_step = after.step(),
                after_len = after.len(),
                "Move did not land on a fresh final step"
            );
            return Err(GameError::InvariantViolation(format!(
                "Postcondition failed: expected step {} of {}, got step {} of {}",
                expected_step,
                expected_step + 1,
                after.step(),
                after.len()
            )));
        }

        if after.history()[..=before.step()] != before.history()[..=before.step()] {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: history before the move was rewritten".to_string(),
            ));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant check failed after move");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_empty_square() {
        let engine = HistoryEngine::new();
        assert!(MoveContract::pre(&engine, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let engine = HistoryEngine::replay(&[4]).unwrap();
        assert_eq!(
            MoveContract::pre(&engine, &Position::Center),
            Err(GameError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_game_over_checked_before_occupancy() {
        let engine = HistoryEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(
            MoveContract::pre(&engine, &Position::TopLeft),
            Err(GameError::GameOver(crate::Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = HistoryEngine::new();
        let mut after = before.clone();
        after.apply_move(4).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = HistoryEngine::new();
        let mut after = before.clone();
        after.apply_move(4).unwrap();
        after.history[1] = after.history[1].with_mark(Position::TopLeft, crate::Player::O);

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(GameError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_stale_pointer() {
        let before = HistoryEngine::new();
        let mut after = before.clone();
        after.apply_move(4).unwrap();
        after.step = 0;

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
