use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::model::Session;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn get_by_id(&self, id: &SessionId) -> Result<Session, RepositoryError>;
    /// Inserts or replaces the session stored under `session.id`.
    async fn save(&self, session: &Session) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &SessionId) -> Result<(), RepositoryError>;
}
