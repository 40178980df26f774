use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::filter::FilterCriteria;
use crate::domain::catalog::model::Product;

pub struct ListProductsParams {
    pub criteria: FilterCriteria,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, CatalogError>;
}
