use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::session::use_cases::end::{EndSessionParams, EndSessionUseCase};
use business::domain::session::use_cases::get::{GetSessionParams, GetSessionUseCase};
use business::domain::session::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::session::use_cases::logout::{LogoutParams, LogoutUseCase};
use business::domain::session::use_cases::start::StartSessionUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionHeader;
use crate::api::session::dto::{LoginRequest, SessionResponse};
use crate::api::tags::ApiTags;

pub struct SessionApi {
    start_use_case: Arc<dyn StartSessionUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    logout_use_case: Arc<dyn LogoutUseCase>,
    get_use_case: Arc<dyn GetSessionUseCase>,
    end_use_case: Arc<dyn EndSessionUseCase>,
}

impl SessionApi {
    pub fn new(
        start_use_case: Arc<dyn StartSessionUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        logout_use_case: Arc<dyn LogoutUseCase>,
        get_use_case: Arc<dyn GetSessionUseCase>,
        end_use_case: Arc<dyn EndSessionUseCase>,
    ) -> Self {
        Self {
            start_use_case,
            login_use_case,
            logout_use_case,
            get_use_case,
            end_use_case,
        }
    }
}

/// Visitor sessions and the demo login
///
/// A session starts logged out with an empty cart. Its id goes in the
/// `X-Session-Id` header of every later request.
#[OpenApi]
impl SessionApi {
    /// Start a session
    #[oai(path = "/sessions", method = "post", tag = "ApiTags::Sessions")]
    async fn start(&self) -> StartSessionResponse {
        match self.start_use_case.execute().await {
            Ok(session) => StartSessionResponse::Created(Json(session.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                StartSessionResponse::InternalError(json)
            }
        }
    }

    /// Log in
    ///
    /// Demo credentials only. A failed attempt leaves the session logged out.
    #[oai(path = "/sessions/login", method = "post", tag = "ApiTags::Sessions")]
    async fn login(&self, auth: SessionHeader, body: Json<LoginRequest>) -> SessionResultResponse {
        let params = LoginParams {
            session_id: auth.0,
            username: body.0.username,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(session) => SessionResultResponse::Ok(Json(session.into())),
            Err(err) => SessionResultResponse::from_error(err.into_error_response()),
        }
    }

    /// Log out
    ///
    /// Keeps the cart. Logging out twice is harmless.
    #[oai(path = "/sessions/logout", method = "post", tag = "ApiTags::Sessions")]
    async fn logout(&self, auth: SessionHeader) -> SessionResultResponse {
        match self
            .logout_use_case
            .execute(LogoutParams { session_id: auth.0 })
            .await
        {
            Ok(session) => SessionResultResponse::Ok(Json(session.into())),
            Err(err) => SessionResultResponse::from_error(err.into_error_response()),
        }
    }

    /// Current session
    #[oai(path = "/sessions/me", method = "get", tag = "ApiTags::Sessions")]
    async fn get(&self, auth: SessionHeader) -> SessionResultResponse {
        match self
            .get_use_case
            .execute(GetSessionParams { session_id: auth.0 })
            .await
        {
            Ok(session) => SessionResultResponse::Ok(Json(session.into())),
            Err(err) => SessionResultResponse::from_error(err.into_error_response()),
        }
    }

    /// End the session
    ///
    /// Discards the session together with its cart.
    #[oai(path = "/sessions/me", method = "delete", tag = "ApiTags::Sessions")]
    async fn end(&self, auth: SessionHeader) -> EndSessionResponse {
        match self
            .end_use_case
            .execute(EndSessionParams { session_id: auth.0 })
            .await
        {
            Ok(()) => EndSessionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => EndSessionResponse::Unauthorized(json),
                    _ => EndSessionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum StartSessionResponse {
    #[oai(status = 201)]
    Created(Json<SessionResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SessionResultResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl SessionResultResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            401 => Self::Unauthorized(json),
            409 => Self::Conflict(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum EndSessionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
