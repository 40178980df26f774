use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::shared::value_objects::SessionId;

pub struct GetCartParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, params: GetCartParams) -> Result<CartSummary, CartError>;
}
