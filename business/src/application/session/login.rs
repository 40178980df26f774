use std::sync::Arc;

use async_trait::async_trait;

use crate::application::session::guard::load_session;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::services::CredentialStore;
use crate::domain::session::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub credentials: Arc<dyn CredentialStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<Session, SessionError> {
        self.logger.info(&format!(
            "Login attempt for '{}' on session {}",
            params.username, params.session_id
        ));

        let mut session = load_session(self.repository.as_ref(), &params.session_id).await?;

        let Some(role) = self
            .credentials
            .verify(&params.username, &params.password)
            .await
        else {
            self.logger
                .warn(&format!("Invalid credentials for '{}'", params.username));
            return Err(SessionError::InvalidCredentials);
        };

        session.login(params.username, role)?;
        self.repository.save(&session).await?;

        self.logger
            .info(&format!("Session {} logged in as {}", session.id, role));
        Ok(session)
    }
}
