use std::sync::Arc;

use async_trait::async_trait;

use crate::application::session::guard::load_session;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::repository::SessionRepository;

pub struct ClearCartUseCaseImpl {
    pub session_repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<(), CartError> {
        let mut session =
            load_session(self.session_repository.as_ref(), &params.session_id).await?;

        let removed = session.cart.lines().len();
        session.cart.clear();
        session.touch();
        self.session_repository.save(&session).await?;

        self.logger.info(&format!(
            "Cleared {} lines from cart of session {}",
            removed, session.id
        ));
        Ok(())
    }
}
