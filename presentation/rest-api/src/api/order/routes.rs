use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::order::use_cases::get_all::{GetOrdersParams, GetOrdersUseCase};
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};
use business::domain::order::value_objects::OrderStatus;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderResponse, UpdateOrderStatusRequest};
use crate::api::security::SessionHeader;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    checkout_use_case: Arc<dyn CheckoutUseCase>,
    get_all_use_case: Arc<dyn GetOrdersUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
}

impl OrderApi {
    pub fn new(
        checkout_use_case: Arc<dyn CheckoutUseCase>,
        get_all_use_case: Arc<dyn GetOrdersUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    ) -> Self {
        Self {
            checkout_use_case,
            get_all_use_case,
            update_status_use_case,
        }
    }
}

/// Orders placed from the cart
#[OpenApi]
impl OrderApi {
    /// Check out
    ///
    /// Turns the cart into a confirmed order at current catalog prices and
    /// empties the cart. Requires a logged-in session.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn checkout(&self, auth: SessionHeader) -> CheckoutResponse {
        match self
            .checkout_use_case
            .execute(CheckoutParams { session_id: auth.0 })
            .await
        {
            Ok(order) => CheckoutResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutResponse::BadRequest(json),
                    401 => CheckoutResponse::Unauthorized(json),
                    _ => CheckoutResponse::InternalError(json),
                }
            }
        }
    }

    /// List orders
    ///
    /// Admins see every order, customers their own. Newest first.
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all(&self, auth: SessionHeader) -> GetOrdersResponse {
        match self
            .get_all_use_case
            .execute(GetOrdersParams { session_id: auth.0 })
            .await
        {
            Ok(orders) => GetOrdersResponse::Ok(Json(orders.into_iter().map(|o| o.into()).collect())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetOrdersResponse::Unauthorized(json),
                    _ => GetOrdersResponse::InternalError(json),
                }
            }
        }
    }

    /// Update order status (admin)
    ///
    /// confirmed -> shipped -> delivered, or confirmed -> cancelled.
    #[oai(path = "/orders/:id/status", method = "put", tag = "ApiTags::Orders")]
    async fn update_status(
        &self,
        auth: SessionHeader,
        id: Path<String>,
        body: Json<UpdateOrderStatusRequest>,
    ) -> UpdateOrderStatusResponse {
        let order_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateOrderStatusResponse::BadRequest(ErrorResponse::json(
                    "ValidationError",
                    "order.invalid_id",
                ));
            }
        };

        let status = match body.0.status.trim().to_lowercase().parse::<OrderStatus>() {
            Ok(status) => status,
            Err(_) => {
                return UpdateOrderStatusResponse::BadRequest(ErrorResponse::json(
                    "ValidationError",
                    "order.invalid_status",
                ));
            }
        };

        let params = UpdateOrderStatusParams {
            session_id: auth.0,
            order_id,
            status,
        };

        match self.update_status_use_case.execute(params).await {
            Ok(order) => UpdateOrderStatusResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => UpdateOrderStatusResponse::Unauthorized(json),
                    403 => UpdateOrderStatusResponse::Forbidden(json),
                    404 => UpdateOrderStatusResponse::NotFound(json),
                    409 => UpdateOrderStatusResponse::Conflict(json),
                    _ => UpdateOrderStatusResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateOrderStatusResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
