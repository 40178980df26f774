use std::sync::Arc;

use async_trait::async_trait;

use crate::application::session::guard::load_session;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use crate::domain::cart::value_objects::Quantity;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::session::repository::SessionRepository;

pub struct AddToCartUseCaseImpl {
    pub session_repository: Arc<dyn SessionRepository>,
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<CartSummary, CartError> {
        self.logger.info(&format!(
            "Adding {} x {} to cart of session {}",
            params.quantity, params.product_id, params.session_id
        ));

        let quantity = match Quantity::new(params.quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                self.logger.warn(&format!(
                    "Ignored add to cart with quantity {}",
                    params.quantity
                ));
                return Err(e);
            }
        };

        let mut session =
            load_session(self.session_repository.as_ref(), &params.session_id).await?;

        if self
            .catalog_repository
            .find_by_id(&params.product_id)
            .await?
            .is_none()
        {
            return Err(CartError::ProductNotFound);
        }

        session.cart.add(params.product_id, quantity);
        session.touch();
        self.session_repository.save(&session).await?;

        let catalog = self.catalog_repository.get_all().await?;
        let summary = session.cart.summarize(&catalog);

        self.logger.info(&format!(
            "Cart of session {} now totals {}",
            session.id, summary.total
        ));
        Ok(summary)
    }
}
