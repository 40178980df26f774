use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::SessionId;

pub struct AddProductParams {
    pub session_id: SessionId,
    pub name: String,
    pub price: u64,
    pub image_ref: String,
    pub description: String,
    pub category: String,
}

#[async_trait]
pub trait AddProductUseCase: Send + Sync {
    async fn execute(&self, params: AddProductParams) -> Result<Product, CatalogError>;
}
