use crate::domain::session::errors::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.cart_empty")]
    CartEmpty,
    #[error("order.not_found")]
    NotFound,
    #[error("order.invalid_status_transition")]
    InvalidStatusTransition,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
