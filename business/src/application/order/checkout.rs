use std::sync::Arc;

use async_trait::async_trait;

use crate::application::session::guard::load_session;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use crate::domain::session::repository::SessionRepository;

pub struct CheckoutUseCaseImpl {
    pub order_repository: Arc<dyn OrderRepository>,
    pub session_repository: Arc<dyn SessionRepository>,
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<Order, OrderError> {
        self.logger
            .info(&format!("Checking out session {}", params.session_id));

        let mut session =
            load_session(self.session_repository.as_ref(), &params.session_id).await?;
        let customer = session.require_login()?.to_string();

        if session.cart.is_empty() {
            return Err(OrderError::CartEmpty);
        }

        let catalog = self.catalog_repository.get_all().await?;
        let summary = session.cart.summarize(&catalog);
        for product_id in &summary.unresolved {
            self.logger.warn(&format!(
                "Dropping {} from checkout: no longer in the catalog",
                product_id
            ));
        }

        let order = Order::place(customer, session.id.clone(), &summary)?;
        self.order_repository.save(&order).await?;

        session.cart.clear();
        session.touch();
        if let Err(e) = self.session_repository.save(&session).await {
            self.logger.error(&format!(
                "Order {} placed but cart of session {} was not cleared: {}",
                order.id, session.id, e
            ));
        }

        self.logger.info(&format!(
            "Order {} confirmed ({}), total {}",
            order.id, order.confirmation_code, order.total
        ));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::value_objects::Quantity;
    use crate::domain::catalog::model::{Deal, Product};
    use crate::domain::catalog::value_objects::{Category, ProductId};
    use crate::domain::errors::RepositoryError;
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

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
            async fn add(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update_price(&self, id: &ProductId, price: u64) -> Result<Vec<Product>, RepositoryError>;
            async fn get_deals(&self) -> Result<Vec<Deal>, RepositoryError>;
        }
    }

    fn catalog() -> Arc<dyn CatalogRepository> {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![Product::from_repository(
                ProductId::new("Laptop"),
                800,
                String::new(),
                String::new(),
                Category::new("Computers"),
            )])
        });
        Arc::new(mock_repo)
    }

    #[tokio::test]
    async fn should_place_order_and_clear_cart() {
        let mut session = logged_in("customer", Role::Customer);
        session
            .cart
            .add(ProductId::new("Laptop"), Quantity::new(3).unwrap());
        let session_id = session.id.clone();

        let mut sessions = sessions_with(session);
        sessions
            .expect_save()
            .withf(|s| s.cart.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let mut orders = MockOrderRepo::new();
        orders.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CheckoutUseCaseImpl {
            order_repository: Arc::new(orders),
            session_repository: Arc::new(sessions),
            catalog_repository: catalog(),
            logger: mock_logger(),
        };

        let order = use_case.execute(CheckoutParams { session_id }).await.unwrap();

        assert_eq!(order.total, 2400);
        assert_eq!(order.customer, "customer");
        assert_eq!(order.status, OrderStatus::Confirmed);
    }

    #[tokio::test]
    async fn should_reject_empty_cart() {
        let session = logged_in("customer", Role::Customer);
        let session_id = session.id.clone();

        let mut orders = MockOrderRepo::new();
        orders.expect_save().never();

        let use_case = CheckoutUseCaseImpl {
            order_repository: Arc::new(orders),
            session_repository: Arc::new(sessions_with(session)),
            catalog_repository: catalog(),
            logger: mock_logger(),
        };

        let result = use_case.execute(CheckoutParams { session_id }).await;

        assert!(matches!(result.unwrap_err(), OrderError::CartEmpty));
    }

    #[tokio::test]
    async fn should_require_login() {
        let mut session = Session::new();
        session
            .cart
            .add(ProductId::new("Laptop"), Quantity::new(1).unwrap());
        let session_id = session.id.clone();

        let use_case = CheckoutUseCaseImpl {
            order_repository: Arc::new(MockOrderRepo::new()),
            session_repository: Arc::new(sessions_with(session)),
            catalog_repository: catalog(),
            logger: mock_logger(),
        };

        let result = use_case.execute(CheckoutParams { session_id }).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Session(SessionError::NotLoggedIn)
        ));
    }

    #[tokio::test]
    async fn should_reject_cart_of_only_dangling_lines() {
        let mut session = logged_in("customer", Role::Customer);
        session
            .cart
            .add(ProductId::new("Retired Gadget"), Quantity::new(2).unwrap());
        let session_id = session.id.clone();

        let mut orders = MockOrderRepo::new();
        orders.expect_save().never();

        let use_case = CheckoutUseCaseImpl {
            order_repository: Arc::new(orders),
            session_repository: Arc::new(sessions_with(session)),
            catalog_repository: catalog(),
            logger: mock_logger(),
        };

        let result = use_case.execute(CheckoutParams { session_id }).await;

        assert!(matches!(result.unwrap_err(), OrderError::CartEmpty));
    }
}
