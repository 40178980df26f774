use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let url = config.server.public_url();
        let app = Self::app(container, config.cors, &url);

        tracing::info!("Server running at {}", url);
        tracing::info!("Swagger UI at {}/docs", url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Routes for every API plus the OpenAPI document and Swagger UI.
    pub fn app(container: DependencyContainer, cors: Cors, public_url: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.catalog_api,
                container.session_api,
                container.cart_api,
                container.order_api,
            ),
            "Storefront API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(public_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing)
    }
}
