use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::catalog::value_objects::ProductId;

use crate::api::cart::dto::{AddToCartRequest, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionHeader;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddToCartUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddToCartUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            clear_use_case,
        }
    }
}

/// Per-session shopping cart
#[OpenApi]
impl CartApi {
    /// View the cart
    ///
    /// Lines are priced with the current catalog. Lines whose product has
    /// disappeared count as 0 and are listed under `unresolved`.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self, auth: SessionHeader) -> GetCartResponse {
        match self
            .get_use_case
            .execute(GetCartParams { session_id: auth.0 })
            .await
        {
            Ok(summary) => GetCartResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetCartResponse::Unauthorized(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Add to cart
    ///
    /// Adds 1 to 5 units. Adding a product already in the cart raises its quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, auth: SessionHeader, body: Json<AddToCartRequest>) -> AddToCartResponse {
        let params = AddToCartParams {
            session_id: auth.0,
            product_id: ProductId::new(body.0.product_id),
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(summary) => AddToCartResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddToCartResponse::BadRequest(json),
                    401 => AddToCartResponse::Unauthorized(json),
                    404 => AddToCartResponse::NotFound(json),
                    _ => AddToCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self, auth: SessionHeader) -> ClearCartResponse {
        match self
            .clear_use_case
            .execute(ClearCartParams { session_id: auth.0 })
            .await
        {
            Ok(()) => ClearCartResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => ClearCartResponse::Unauthorized(json),
                    _ => ClearCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
