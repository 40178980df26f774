use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;

#[async_trait]
pub trait StartSessionUseCase: Send + Sync {
    async fn execute(&self) -> Result<Session, SessionError>;
}
