//! Game session management.
//!
//! Each session owns one [`HistoryEngine`]. The engine has no internal
//! synchronization, so every command runs while the manager's lock is held:
//! one mutator at a time, and readers only ever receive copies.

use derive_more::{Display, Error};
use rewind_tictactoe::{GameError, HistoryEngine, HistoryView, Player};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// What went wrong with a session command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionErrorKind {
    /// No session with this id.
    #[display("Session {} not found", _0)]
    NotFound(SessionId),
    /// A session with this id already exists.
    #[display("Session {} already exists", _0)]
    AlreadyExists(SessionId),
    /// Another thread panicked while holding the session lock.
    #[display("Session lock poisoned")]
    LockPoisoned,
    /// The engine rejected the command.
    #[display("{}", _0)]
    Game(GameError),
}

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// Error kind.
    pub kind: SessionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The engine's rejection reason, if the engine rejected the command.
    pub fn game_error(&self) -> Option<&GameError> {
        match &self.kind {
            SessionErrorKind::Game(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GameError> for SessionError {
    #[track_caller]
    fn from(err: GameError) -> Self {
        Self::new(SessionErrorKind::Game(err))
    }
}

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, HistoryEngine>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, HistoryEngine>>, SessionError> {
        self.sessions.lock().map_err(|_| {
            warn!("Session lock poisoned");
            SessionError::new(SessionErrorKind::LockPoisoned)
        })
    }

    /// Creates a new game session at the start of a game.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: impl Into<SessionId> + std::fmt::Debug) -> Result<SessionId, SessionError> {
        let id = id.into();
        let mut sessions = self.lock()?;

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::new(SessionErrorKind::AlreadyExists(id)));
        }

        sessions.insert(id.clone(), HistoryEngine::new());
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Removes a session, returning its final state.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<HistoryEngine, SessionError> {
        self.lock()?.remove(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::new(SessionErrorKind::NotFound(id.to_string()))
        })
    }

    /// Returns a copy of a session's engine.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Result<HistoryEngine, SessionError> {
        self.with_session(id, |engine| Ok(engine.clone()))
    }

    /// Returns the read-only view of a session.
    #[instrument(skip(self))]
    pub fn view(&self, id: &str) -> Result<HistoryView, SessionError> {
        self.with_session(id, |engine| Ok(engine.view()))
    }

    /// Runs `f` on a session's engine while holding the lock.
    ///
    /// The engine leaves its state untouched when it rejects a command, so
    /// an `Err` from `f` never leaves a half-applied change behind.
    #[instrument(skip(self, f))]
    pub fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut HistoryEngine) -> Result<T, GameError>,
    ) -> Result<T, SessionError> {
        let mut sessions = self.lock()?;
        let engine = sessions.get_mut(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::new(SessionErrorKind::NotFound(id.to_string()))
        })?;
        Ok(f(engine)?)
    }

    /// Applies a move in a session.
    #[instrument(skip(self))]
    pub fn apply_move(&self, id: &str, cell: usize) -> Result<Player, SessionError> {
        self.with_session(id, |engine| engine.apply_move(cell))
            .inspect_err(|e| warn!(session_id = id, cell, error = %e, "Move rejected"))
    }

    /// Moves a session's step pointer.
    #[instrument(skip(self))]
    pub fn jump_to(&self, id: &str, step: usize) -> Result<usize, SessionError> {
        self.with_session(id, |engine| engine.jump_to(step))
            .inspect_err(|e| warn!(session_id = id, step, error = %e, "Jump rejected"))
    }

    /// Lists all session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Result<Vec<SessionId>, SessionError> {
        let mut ids: Vec<_> = self.lock()?.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let manager = SessionManager::new();
        manager.create_session("a").unwrap();
        assert_eq!(manager.get_session("a").unwrap(), HistoryEngine::new());
    }

    #[test]
    fn test_duplicate_session_rejected() {
        let manager = SessionManager::new();
        manager.create_session("a").unwrap();
        let err = manager.create_session("a").unwrap_err();
        assert_eq!(err.kind, SessionErrorKind::AlreadyExists("a".to_string()));
    }

    #[test]
    fn test_missing_session() {
        let manager = SessionManager::new();
        let err = manager.apply_move("nope", 0).unwrap_err();
        assert_eq!(err.kind, SessionErrorKind::NotFound("nope".to_string()));
        assert!(err.game_error().is_none());
    }

    #[test]
    fn test_engine_rejection_is_surfaced() {
        let manager = SessionManager::new();
        manager.create_session("a").unwrap();
        manager.apply_move("a", 4).unwrap();

        let err = manager.apply_move("a", 4).unwrap_err();
        assert!(matches!(err.game_error(), Some(GameError::CellOccupied(_))));
        assert_eq!(manager.get_session("a").unwrap().len(), 2);
    }

    #[test]
    fn test_remove_session() {
        let manager = SessionManager::new();
        manager.create_session("a").unwrap();
        manager.apply_move("a", 0).unwrap();

        let engine = manager.remove_session("a").unwrap();
        assert_eq!(engine.step(), 1);
        assert!(manager.list_sessions().unwrap().is_empty());
    }
}
