use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::start::StartSessionUseCase;

pub struct StartSessionUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl StartSessionUseCase for StartSessionUseCaseImpl {
    async fn execute(&self) -> Result<Session, SessionError> {
        let session = Session::new();
        self.repository.save(&session).await?;

        self.logger
            .info(&format!("Session started: {}", session.id));
        Ok(session)
    }
}
