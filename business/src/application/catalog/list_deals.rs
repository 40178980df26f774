use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Deal;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::list_deals::ListDealsUseCase;
use crate::domain::logger::Logger;

pub struct ListDealsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListDealsUseCase for ListDealsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Deal>, CatalogError> {
        self.logger.info("Fetching today's deals");
        let deals = self.repository.get_deals().await?;
        self.logger.info(&format!("Found {} deals", deals.len()));
        Ok(deals)
    }
}
