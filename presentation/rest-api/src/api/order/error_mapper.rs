use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            OrderError::CartEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.cart_empty",
            ),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFoundError", "order.not_found"),
            OrderError::InvalidStatusTransition => (
                StatusCode::CONFLICT,
                "Conflict",
                "order.invalid_status_transition",
            ),
            OrderError::Session(err) => return err.into_error_response(),
            OrderError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_illegal_transition_to_conflict() {
        let (status, json) = OrderError::InvalidStatusTransition.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "order.invalid_status_transition");
    }
}
