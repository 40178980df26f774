use std::sync::Arc;

use async_trait::async_trait;

use crate::application::session::guard::load_session;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::session::repository::SessionRepository;

pub struct GetCartUseCaseImpl {
    pub session_repository: Arc<dyn SessionRepository>,
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<CartSummary, CartError> {
        let session = load_session(self.session_repository.as_ref(), &params.session_id).await?;
        let catalog = self.catalog_repository.get_all().await?;

        let summary = session.cart.summarize(&catalog);
        if !summary.unresolved.is_empty() {
            self.logger.warn(&format!(
                "Cart of session {} references {} products missing from the catalog",
                session.id,
                summary.unresolved.len()
            ));
        }

        self.logger.debug(&format!(
            "Cart of session {}: {} lines, total {}",
            session.id,
            summary.lines.len(),
            summary.total
        ));
        Ok(summary)
    }
}
