use crate::domain::session::errors::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.name_empty")]
    NameEmpty,
    #[error("catalog.price_too_low")]
    PriceTooLow,
    #[error("catalog.already_exists")]
    AlreadyExists,
    #[error("catalog.not_found")]
    NotFound,
    #[error("catalog.invalid_price_range")]
    InvalidPriceRange,
    #[error("catalog.deal_not_discounted")]
    DealNotDiscounted,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
