use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Deal;

#[async_trait]
pub trait ListDealsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Deal>, CatalogError>;
}
