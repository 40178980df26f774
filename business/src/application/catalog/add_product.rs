use std::sync::Arc;

use async_trait::async_trait;

use crate::application::session::guard::load_admin_session;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{NewProductProps, Product};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::session::repository::SessionRepository;

pub struct AddProductUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub session_repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<Product, CatalogError> {
        self.logger
            .info(&format!("Adding product to catalog: {}", params.name));

        if let Err(e) =
            load_admin_session(self.session_repository.as_ref(), &params.session_id).await
        {
            self.logger.warn(&format!(
                "Rejected catalog change from session {}: {}",
                params.session_id, e
            ));
            return Err(e.into());
        }

        let product = Product::new(NewProductProps {
            name: params.name,
            price: params.price,
            image_ref: params.image_ref,
            description: params.description,
            category: params.category,
        })?;

        self.repository.add(&product).await.map_err(|e| match e {
            RepositoryError::Duplicated => CatalogError::AlreadyExists,
            other => CatalogError::Repository(other),
        })?;

        self.logger
            .info(&format!("Product added: {} at {}", product.id, product.price));
        Ok(product)
    }
}
