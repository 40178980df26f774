use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::shared::value_objects::SessionId;

pub struct LogoutParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, params: LogoutParams) -> Result<Session, SessionError>;
}
