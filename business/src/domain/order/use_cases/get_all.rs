use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::SessionId;

pub struct GetOrdersParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait GetOrdersUseCase: Send + Sync {
    async fn execute(&self, params: GetOrdersParams) -> Result<Vec<Order>, OrderError>;
}
