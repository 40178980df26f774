use std::sync::Arc;

use chrono::Duration;

use logger::TracingLogger;
use memory::catalog::repository::CatalogRepositoryInMemory;
use memory::credentials::{DemoCredential, DemoCredentialStore};
use memory::order::repository::OrderRepositoryInMemory;
use memory::session::repository::SessionRepositoryInMemory;

use business::application::cart::add_item::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::catalog::add_product::AddProductUseCaseImpl;
use business::application::catalog::list_categories::ListCategoriesUseCaseImpl;
use business::application::catalog::list_deals::ListDealsUseCaseImpl;
use business::application::catalog::list_products::ListProductsUseCaseImpl;
use business::application::catalog::update_price::UpdatePriceUseCaseImpl;
use business::application::order::checkout::CheckoutUseCaseImpl;
use business::application::order::get_all::GetOrdersUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::session::end::EndSessionUseCaseImpl;
use business::application::session::get::GetSessionUseCaseImpl;
use business::application::session::login::LoginUseCaseImpl;
use business::application::session::logout::LogoutUseCaseImpl;
use business::application::session::start::StartSessionUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::catalog::routes::CatalogApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::order::routes::OrderApi;
use crate::api::session::routes::SessionApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub catalog_api: CatalogApi,
    pub session_api: SessionApi,
    pub cart_api: CartApi,
    pub order_api: OrderApi,
}

impl DependencyContainer {
    /// Wires every use case over fresh in-memory stores seeded with the demo catalog.
    pub fn new(credentials: Vec<DemoCredential>, session_idle_ttl: Duration) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let catalog_repository = Arc::new(CatalogRepositoryInMemory::seeded());
        let session_repository = Arc::new(SessionRepositoryInMemory::new(session_idle_ttl));
        let order_repository = Arc::new(OrderRepositoryInMemory::new());
        let credential_store = Arc::new(DemoCredentialStore::new(credentials));

        // Catalog use cases
        let list_products_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let list_deals_use_case = Arc::new(ListDealsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let list_categories_use_case = Arc::new(ListCategoriesUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductUseCaseImpl {
            repository: catalog_repository.clone(),
            session_repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let update_price_use_case = Arc::new(UpdatePriceUseCaseImpl {
            repository: catalog_repository.clone(),
            session_repository: session_repository.clone(),
            logger: logger.clone(),
        });

        // Session use cases
        let start_session_use_case = Arc::new(StartSessionUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: session_repository.clone(),
            credentials: credential_store,
            logger: logger.clone(),
        });
        let logout_use_case = Arc::new(LogoutUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let get_session_use_case = Arc::new(GetSessionUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let end_session_use_case = Arc::new(EndSessionUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            session_repository: session_repository.clone(),
            catalog_repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            session_repository: session_repository.clone(),
            catalog_repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            session_repository: session_repository.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            order_repository: order_repository.clone(),
            session_repository: session_repository.clone(),
            catalog_repository,
            logger: logger.clone(),
        });
        let get_orders_use_case = Arc::new(GetOrdersUseCaseImpl {
            order_repository: order_repository.clone(),
            session_repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let update_order_status_use_case = Arc::new(UpdateOrderStatusUseCaseImpl {
            order_repository,
            session_repository,
            logger,
        });

        let catalog_api = CatalogApi::new(
            list_products_use_case,
            list_deals_use_case,
            list_categories_use_case,
            add_product_use_case,
            update_price_use_case,
        );

        let session_api = SessionApi::new(
            start_session_use_case,
            login_use_case,
            logout_use_case,
            get_session_use_case,
            end_session_use_case,
        );

        let cart_api = CartApi::new(get_cart_use_case, add_to_cart_use_case, clear_cart_use_case);

        let order_api = OrderApi::new(
            checkout_use_case,
            get_orders_use_case,
            update_order_status_use_case,
        );

        Self {
            health_api,
            catalog_api,
            session_api,
            cart_api,
            order_api,
        }
    }
}
