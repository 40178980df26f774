use std::sync::Arc;

use async_trait::async_trait;

use crate::application::session::guard::load_session;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::end::{EndSessionParams, EndSessionUseCase};

pub struct EndSessionUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl EndSessionUseCase for EndSessionUseCaseImpl {
    async fn execute(&self, params: EndSessionParams) -> Result<(), SessionError> {
        self.logger
            .info(&format!("Ending session: {}", params.session_id));

        // Verify it exists
        load_session(self.repository.as_ref(), &params.session_id).await?;

        self.repository.delete(&params.session_id).await?;

        self.logger
            .info(&format!("Session ended: {}", params.session_id));
        Ok(())
    }
}
