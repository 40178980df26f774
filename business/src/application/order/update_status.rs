use std::sync::Arc;

use async_trait::async_trait;

use crate::application::session::guard::load_admin_session;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};
use crate::domain::session::repository::SessionRepository;

pub struct UpdateOrderStatusUseCaseImpl {
    pub order_repository: Arc<dyn OrderRepository>,
    pub session_repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError> {
        self.logger.info(&format!(
            "Moving order {} to {}",
            params.order_id, params.status
        ));

        load_admin_session(self.session_repository.as_ref(), &params.session_id).await?;

        let mut order = self
            .order_repository
            .get_by_id(params.order_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        let previous = order.status;
        order.transition_to(params.status)?;
        self.order_repository.save(&order).await?;

        self.logger.info(&format!(
            "Order {} moved from {} to {}",
            order.id, previous, order.status
        ));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartSummary, CartSummaryLine};
    use crate::domain::catalog::value_objects::ProductId;
    use crate::domain::order::value_objects::OrderStatus;
    use crate::domain::session::errors::SessionError;
    use crate::domain::session::model::Session;
    use crate::domain::session::value_objects::Role;
    use crate::domain::shared::value_objects::SessionId;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
            async fn get_by_customer(&self, customer: &str) -> Result<Vec<Order>, RepositoryError>;
            async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub SessionRepo {}

        #[async_trait]
        impl SessionRepository for SessionRepo {
            async fn get_by_id(&self, id: &SessionId) -> Result<Session, RepositoryError>;
            async fn save(&self, session: &Session) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &SessionId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sessions_with(session: Session) -> MockSessionRepo {
        let mut mock_repo = MockSessionRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(session.clone()));
        mock_repo
    }

    fn logged_in(username: &str, role: Role) -> Session {
        let mut session = Session::new();
        session.login(username, role).unwrap();
        session
    }

    fn confirmed_order() -> Order {
        let summary = CartSummary {
            lines: vec![CartSummaryLine {
                product_id: ProductId::new("Smart Watch"),
                quantity: 1,
                unit_price: Some(120),
                subtotal: 120,
            }],
            total: 120,
            unresolved: vec![],
        };
        Order::place("customer", SessionId::new("s-1"), &summary).unwrap()
    }

    fn params(session: &Session, order: &Order, status: OrderStatus) -> UpdateOrderStatusParams {
        UpdateOrderStatusParams {
            session_id: session.id.clone(),
            order_id: order.id,
            status,
        }
    }

    #[tokio::test]
    async fn should_ship_confirmed_order() {
        let admin = logged_in("admin", Role::Admin);
        let order = confirmed_order();
        let stored = order.clone();

        let mut orders = MockOrderRepo::new();
        orders
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        orders
            .expect_save()
            .withf(|o| o.status == OrderStatus::Shipped)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateOrderStatusUseCaseImpl {
            order_repository: Arc::new(orders),
            session_repository: Arc::new(sessions_with(admin.clone())),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(params(&admin, &order, OrderStatus::Shipped))
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Shipped);
    }

    #[tokio::test]
    async fn should_reject_illegal_transition() {
        let admin = logged_in("admin", Role::Admin);
        let order = confirmed_order();
        let stored = order.clone();

        let mut orders = MockOrderRepo::new();
        orders
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        orders.expect_save().never();

        let use_case = UpdateOrderStatusUseCaseImpl {
            order_repository: Arc::new(orders),
            session_repository: Arc::new(sessions_with(admin.clone())),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(&admin, &order, OrderStatus::Delivered))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::InvalidStatusTransition
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_order() {
        let admin = logged_in("admin", Role::Admin);

        let mut orders = MockOrderRepo::new();
        orders
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateOrderStatusUseCaseImpl {
            order_repository: Arc::new(orders),
            session_repository: Arc::new(sessions_with(admin.clone())),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                session_id: admin.id.clone(),
                order_id: Uuid::new_v4(),
                status: OrderStatus::Shipped,
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::NotFound));
    }

    #[tokio::test]
    async fn should_forbid_customer() {
        let customer = logged_in("customer", Role::Customer);
        let order = confirmed_order();

        let mut orders = MockOrderRepo::new();
        orders.expect_get_by_id().never();

        let use_case = UpdateOrderStatusUseCaseImpl {
            order_repository: Arc::new(orders),
            session_repository: Arc::new(sessions_with(customer.clone())),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(&customer, &order, OrderStatus::Cancelled))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Session(SessionError::Forbidden)
        ));
    }
}
