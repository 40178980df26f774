use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::session::errors::SessionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SessionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SessionError::NotFound => (
                StatusCode::UNAUTHORIZED,
                "AuthError",
                "session.not_found",
            ),
            SessionError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "AuthError",
                "session.invalid_credentials",
            ),
            SessionError::NotLoggedIn => (
                StatusCode::UNAUTHORIZED,
                "AuthError",
                "session.not_logged_in",
            ),
            SessionError::AlreadyLoggedIn => (
                StatusCode::CONFLICT,
                "Conflict",
                "session.already_logged_in",
            ),
            SessionError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden", "session.forbidden"),
            SessionError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}
