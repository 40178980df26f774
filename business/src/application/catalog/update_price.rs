use std::sync::Arc;

use async_trait::async_trait;

use crate::application::session::guard::load_admin_session;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{Product, validate_price};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::update_price::{UpdatePriceParams, UpdatePriceUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::session::repository::SessionRepository;

pub struct UpdatePriceUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub session_repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdatePriceUseCase for UpdatePriceUseCaseImpl {
    async fn execute(&self, params: UpdatePriceParams) -> Result<Vec<Product>, CatalogError> {
        self.logger.info(&format!(
            "Updating price of {} to {}",
            params.product_id, params.new_price
        ));

        load_admin_session(self.session_repository.as_ref(), &params.session_id).await?;
        validate_price(params.new_price)?;

        let updated = self
            .repository
            .update_price(&params.product_id, params.new_price)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::NotFound,
                other => CatalogError::Repository(other),
            })?;

        if updated.len() > 1 {
            self.logger.warn(&format!(
                "Price update matched {} entries named {}",
                updated.len(),
                params.product_id
            ));
        }

        self.logger
            .info(&format!("Price updated: {}", params.product_id));
        Ok(updated)
    }
}
