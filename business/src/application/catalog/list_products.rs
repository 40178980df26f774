use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::filter::filter;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::list_products::{ListProductsParams, ListProductsUseCase};
use crate::domain::logger::Logger;

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, CatalogError> {
        let criteria = params.criteria;
        self.logger.debug(&format!(
            "Listing products: search='{}', price={}..={}, category={}",
            criteria.search_term,
            criteria.price_range.min(),
            criteria.price_range.max(),
            criteria.category
        ));

        let products = self.repository.get_all().await?;
        let visible = filter(&products, &criteria);

        self.logger.info(&format!(
            "Found {} of {} products",
            visible.len(),
            products.len()
        ));
        Ok(visible)
    }
}
