use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::catalog::value_objects::ProductId;
use crate::domain::shared::value_objects::SessionId;

pub struct AddToCartParams {
    pub session_id: SessionId,
    pub product_id: ProductId,
    pub quantity: u32,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> Result<CartSummary, CartError>;
}
