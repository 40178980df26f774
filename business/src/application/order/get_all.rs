use std::sync::Arc;

use async_trait::async_trait;

use crate::application::session::guard::load_session;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::{GetOrdersParams, GetOrdersUseCase};
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::value_objects::Role;

pub struct GetOrdersUseCaseImpl {
    pub order_repository: Arc<dyn OrderRepository>,
    pub session_repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrdersUseCase for GetOrdersUseCaseImpl {
    async fn execute(&self, params: GetOrdersParams) -> Result<Vec<Order>, OrderError> {
        let session = load_session(self.session_repository.as_ref(), &params.session_id).await?;
        let customer = session.require_login()?;

        let orders = match session.role() {
            Some(Role::Admin) => self.order_repository.get_all().await?,
            _ => self.order_repository.get_by_customer(customer).await?,
        };

        self.logger.info(&format!(
            "Found {} orders visible to {}",
            orders.len(),
            customer
        ));
        Ok(orders)
    }
}
