use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::value_objects::ProductId;
use crate::domain::shared::value_objects::SessionId;

pub struct UpdatePriceParams {
    pub session_id: SessionId,
    pub product_id: ProductId,
    pub new_price: u64,
}

#[async_trait]
pub trait UpdatePriceUseCase: Send + Sync {
    async fn execute(&self, params: UpdatePriceParams) -> Result<Vec<Product>, CatalogError>;
}
