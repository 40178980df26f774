use crate::domain::session::errors::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.quantity_out_of_range")]
    QuantityOutOfRange,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
