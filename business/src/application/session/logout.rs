use std::sync::Arc;

use async_trait::async_trait;

use crate::application::session::guard::load_session;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::logout::{LogoutParams, LogoutUseCase};

pub struct LogoutUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self, params: LogoutParams) -> Result<Session, SessionError> {
        let mut session = load_session(self.repository.as_ref(), &params.session_id).await?;

        if !session.is_logged_in() {
            self.logger
                .debug(&format!("Session {} already logged out", session.id));
            return Ok(session);
        }

        session.logout();
        self.repository.save(&session).await?;

        self.logger
            .info(&format!("Session {} logged out", session.id));
        Ok(session)
    }
}
