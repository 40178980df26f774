use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            CartError::QuantityOutOfRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.quantity_out_of_range",
            ),
            CartError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFoundError",
                "cart.product_not_found",
            ),
            CartError::Session(err) => return err.into_error_response(),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}
