//! Mock implementation of SessionRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::errors::{AuthError, DomainError, DomainResult};

use super::r#trait::SessionRepository;

/// In-memory session repository for testing.
///
/// The single `RwLock` serializes operations on every session ID,
/// which over-satisfies the per-ID ordering contract.
pub struct MockSessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl MockSessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn create(&self, session: Session) -> DomainResult<Session> {
        let mut sessions = self.sessions.write().await;

        // Session-ID collision is fatal, never a silent merge
        if sessions.contains_key(&session.id) {
            return Err(DomainError::Persistence {
                message: format!("session {} already exists", session.id),
            });
        }

        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn get(&self, id: Uuid) -> DomainResult<Session> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or_else(|| AuthError::SessionNotFound.into())
    }

    async fn revoke(&self, id: Uuid) -> DomainResult<()> {
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(&id) {
            Some(session) => {
                session.revoke();
                Ok(())
            }
            None => Err(AuthError::SessionNotFound.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut sessions = self.sessions.write().await;

        match sessions.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AuthError::SessionNotFound.into()),
        }
    }

    async fn delete_by_owner(&self, username: &str) -> DomainResult<()> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, session| session.username != username);

        if sessions.len() == before {
            return Err(AuthError::SessionNotFound.into());
        }
        Ok(())
    }
}
