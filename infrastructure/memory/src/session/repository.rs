use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::session::model::Session;
use business::domain::session::repository::SessionRepository;
use business::domain::shared::value_objects::SessionId;

pub const DEFAULT_IDLE_TTL_MINUTES: i64 = 60;

/// Sessions keyed by id; one visitor never sees another's cart or login.
///
/// A session untouched for longer than `idle_ttl` counts as gone: reads
/// miss it and the next `save` drops it from the map.
pub struct SessionRepositoryInMemory {
    sessions: RwLock<HashMap<SessionId, Session>>,
    idle_ttl: Duration,
}

impl SessionRepositoryInMemory {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_ttl,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn is_expired(&self, session: &Session) -> bool {
        Utc::now() - session.updated_at > self.idle_ttl
    }
}

impl Default for SessionRepositoryInMemory {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_IDLE_TTL_MINUTES))
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryInMemory {
    async fn get_by_id(&self, id: &SessionId) -> Result<Session, RepositoryError> {
        self.sessions
            .read()
            .await
            .get(id)
            .filter(|session| !self.is_expired(session))
            .cloned()
            .ok_or_else(RepositoryError::not_found)
    }

    async fn save(&self, session: &Session) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, stored| !self.is_expired(stored));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, "evicted idle sessions");
        }
        sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), RepositoryError> {
        self.sessions.write().await.remove(id);
        Ok(())
    }
}
