//! Session management for active game sessions
//!
//! Each browser tab plays its own session. Sessions are kept in memory only
//! and each one sits behind its own mutex so that overlapping requests
//! (for example a round draw racing a pool refill) are serialized.
//!
//! Tabs that close without ending their session are dropped once they have
//! been idle for longer than the configured limit.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::application::services::GameSession;
use crate::domain::value_objects::SessionId;

pub type SharedGameSession = Arc<Mutex<GameSession>>;

/// A registered game session
#[derive(Clone)]
pub struct ActiveSession {
    pub session: SharedGameSession,
    pub created_at: DateTime<Utc>,
    /// Last time a request looked the session up
    pub last_activity: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(SessionId),
}

/// Registry of all active game sessions
#[derive(Default)]
pub struct SessionManager {
    sessions: HashMap<SessionId, ActiveSession>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session and return its new identifier
    pub fn insert(&mut self, session: GameSession) -> SessionId {
        let session_id = SessionId::new();
        let now = Utc::now();
        self.sessions.insert(
            session_id,
            ActiveSession {
                session: Arc::new(Mutex::new(session)),
                created_at: now,
                last_activity: now,
            },
        );
        tracing::info!("Created game session {}", session_id);
        session_id
    }

    /// Look up a session and mark it as active
    pub fn get(&mut self, session_id: SessionId) -> Result<SharedGameSession, SessionError> {
        let active = self
            .sessions
            .get_mut(&session_id)
            .ok_or(SessionError::NotFound(session_id))?;
        active.last_activity = Utc::now();
        Ok(active.session.clone())
    }

    pub fn created_at(&self, session_id: SessionId) -> Option<DateTime<Utc>> {
        self.sessions.get(&session_id).map(|active| active.created_at)
    }

    pub fn remove(&mut self, session_id: SessionId) -> Result<(), SessionError> {
        if self.sessions.remove(&session_id).is_none() {
            return Err(SessionError::NotFound(session_id));
        }
        tracing::info!("Removed game session {}", session_id);
        Ok(())
    }

    /// Drop every session not looked up within `max_idle` of `now`
    ///
    /// Returns the number of sessions removed.
    pub fn remove_idle(&mut self, max_idle: Duration, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|session_id, active| {
            let idle = (now - active.last_activity).to_std().unwrap_or_default();
            if idle > max_idle {
                tracing::info!("Expired idle game session {}", session_id);
                return false;
            }
            true
        });
        before - self.sessions.len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::mock::MockCatalog;
    use crate::application::services::{PokemonPoolLoader, DEFAULT_CATALOG_LIMIT};

    fn create_test_session() -> GameSession {
        let loader = PokemonPoolLoader::new(Arc::new(MockCatalog::starters()), DEFAULT_CATALOG_LIMIT);
        GameSession::new(loader)
    }

    #[test]
    fn test_insert_and_get() {
        let mut manager = SessionManager::new();
        let session_id = manager.insert(create_test_session());

        assert!(manager.get(session_id).is_ok());
        assert!(manager.created_at(session_id).is_some());
        assert_eq!(manager.session_count(), 1);
    }

    #[test]
    fn test_unknown_session() {
        let mut manager = SessionManager::new();
        let missing = SessionId::new();

        assert!(matches!(manager.get(missing), Err(SessionError::NotFound(id)) if id == missing));
    }

    #[test]
    fn test_remove() {
        let mut manager = SessionManager::new();
        let session_id = manager.insert(create_test_session());

        assert!(manager.remove(session_id).is_ok());
        assert!(manager.get(session_id).is_err());
        assert_eq!(manager.session_count(), 0);
        assert!(manager.remove(session_id).is_err());
    }

    #[test]
    fn test_idle_session_is_expired() {
        let mut manager = SessionManager::new();
        let session_id = manager.insert(create_test_session());
        let max_idle = Duration::from_secs(60);

        assert_eq!(manager.remove_idle(max_idle, Utc::now()), 0);
        assert_eq!(manager.session_count(), 1);

        let later = Utc::now() + chrono::Duration::seconds(61);
        assert_eq!(manager.remove_idle(max_idle, later), 1);
        assert_eq!(manager.session_count(), 0);
        assert!(manager.get(session_id).is_err());
    }

    #[test]
    fn test_lookup_keeps_session_alive() {
        let mut manager = SessionManager::new();
        let stale = manager.insert(create_test_session());
        let touched = manager.insert(create_test_session());
        let an_hour_ago = Utc::now() - chrono::Duration::hours(1);
        for active in manager.sessions.values_mut() {
            active.last_activity = an_hour_ago;
        }

        assert!(manager.get(touched).is_ok());
        assert_eq!(manager.remove_idle(Duration::from_secs(60), Utc::now()), 1);

        assert!(manager.get(stale).is_err());
        assert!(manager.get(touched).is_ok());
        assert!(manager.created_at(touched).is_some());
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let mut manager = SessionManager::new();
        let first = manager.insert(create_test_session());
        let second = manager.insert(create_test_session());

        let first_session = manager.get(first).unwrap();
        first_session.lock().await.start().await.unwrap();

        let second_session = manager.get(second).unwrap();
        assert!(!first_session.lock().await.is_loading());
        assert!(second_session.lock().await.is_loading());
    }
}
