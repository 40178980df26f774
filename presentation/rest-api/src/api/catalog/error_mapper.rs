use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            CatalogError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.name_empty",
            ),
            CatalogError::PriceTooLow => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.price_too_low",
            ),
            CatalogError::InvalidPriceRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.invalid_price_range",
            ),
            CatalogError::DealNotDiscounted => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.deal_not_discounted",
            ),
            CatalogError::AlreadyExists => (
                StatusCode::CONFLICT,
                "Conflict",
                "catalog.already_exists",
            ),
            CatalogError::NotFound => (StatusCode::NOT_FOUND, "NotFoundError", "catalog.not_found"),
            CatalogError::Session(err) => return err.into_error_response(),
            CatalogError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}
