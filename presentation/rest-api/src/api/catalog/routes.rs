use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::filter::{FilterCriteria, PriceRange};
use business::domain::catalog::use_cases::add_product::{AddProductParams, AddProductUseCase};
use business::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;
use business::domain::catalog::use_cases::list_deals::ListDealsUseCase;
use business::domain::catalog::use_cases::list_products::{
    ListProductsParams, ListProductsUseCase,
};
use business::domain::catalog::use_cases::update_price::{UpdatePriceParams, UpdatePriceUseCase};
use business::domain::catalog::value_objects::{CategoryFilter, ProductId};

use crate::api::catalog::dto::{
    CreateProductRequest, DealResponse, ProductResponse, UpdatePriceRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionHeader;
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    list_products_use_case: Arc<dyn ListProductsUseCase>,
    list_deals_use_case: Arc<dyn ListDealsUseCase>,
    list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
    add_product_use_case: Arc<dyn AddProductUseCase>,
    update_price_use_case: Arc<dyn UpdatePriceUseCase>,
}

impl CatalogApi {
    pub fn new(
        list_products_use_case: Arc<dyn ListProductsUseCase>,
        list_deals_use_case: Arc<dyn ListDealsUseCase>,
        list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
        add_product_use_case: Arc<dyn AddProductUseCase>,
        update_price_use_case: Arc<dyn UpdatePriceUseCase>,
    ) -> Self {
        Self {
            list_products_use_case,
            list_deals_use_case,
            list_categories_use_case,
            add_product_use_case,
            update_price_use_case,
        }
    }
}

/// Product catalog API
///
/// Browsing is public. Adding products and changing prices needs an admin session.
#[OpenApi]
impl CatalogApi {
    /// List products
    ///
    /// Applies the search term, then the inclusive price range, then the
    /// category. Omitted parameters do not filter. Catalog order is kept.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn list_products(
        &self,
        /// Case-insensitive substring of the product name
        search: Query<Option<String>>,
        min_price: Query<Option<u64>>,
        max_price: Query<Option<u64>>,
        /// Category name, or `All`
        category: Query<Option<String>>,
    ) -> ListProductsResponse {
        let price_range = match PriceRange::new(
            min_price.0.unwrap_or(0),
            max_price.0.unwrap_or(u64::MAX),
        ) {
            Ok(range) => range,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return ListProductsResponse::BadRequest(json);
            }
        };

        let criteria = FilterCriteria {
            search_term: search.0.unwrap_or_default(),
            price_range,
            category: category
                .0
                .as_deref()
                .map(CategoryFilter::from)
                .unwrap_or_default(),
        };

        match self
            .list_products_use_case
            .execute(ListProductsParams { criteria })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ListProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListProductsResponse::BadRequest(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Today's deals
    #[oai(path = "/deals", method = "get", tag = "ApiTags::Catalog")]
    async fn list_deals(&self) -> ListDealsResponse {
        match self.list_deals_use_case.execute().await {
            Ok(deals) => ListDealsResponse::Ok(Json(deals.into_iter().map(|d| d.into()).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListDealsResponse::InternalError(json)
            }
        }
    }

    /// List categories
    ///
    /// Distinct categories in catalog order, without the `All` wildcard.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn list_categories(&self) -> ListCategoriesResponse {
        match self.list_categories_use_case.execute().await {
            Ok(categories) => ListCategoriesResponse::Ok(Json(
                categories.into_iter().map(|c| c.to_string()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListCategoriesResponse::InternalError(json)
            }
        }
    }

    /// Add a product (admin)
    #[oai(path = "/products", method = "post", tag = "ApiTags::Catalog")]
    async fn add_product(
        &self,
        auth: SessionHeader,
        body: Json<CreateProductRequest>,
    ) -> AddProductResponse {
        let params = AddProductParams {
            session_id: auth.0,
            name: body.0.name,
            price: body.0.price,
            image_ref: body.0.image_ref,
            description: body.0.description,
            category: body.0.category,
        };

        match self.add_product_use_case.execute(params).await {
            Ok(product) => AddProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddProductResponse::BadRequest(json),
                    401 => AddProductResponse::Unauthorized(json),
                    403 => AddProductResponse::Forbidden(json),
                    409 => AddProductResponse::Conflict(json),
                    _ => AddProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Change a product price (admin)
    ///
    /// Every catalog entry with this name gets the new price.
    #[oai(path = "/products/:id/price", method = "put", tag = "ApiTags::Catalog")]
    async fn update_price(
        &self,
        auth: SessionHeader,
        /// Product name
        id: Path<String>,
        body: Json<UpdatePriceRequest>,
    ) -> UpdatePriceResponse {
        let params = UpdatePriceParams {
            session_id: auth.0,
            product_id: ProductId::new(id.0),
            new_price: body.0.price,
        };

        match self.update_price_use_case.execute(params).await {
            Ok(products) => {
                UpdatePriceResponse::Ok(Json(products.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdatePriceResponse::BadRequest(json),
                    401 => UpdatePriceResponse::Unauthorized(json),
                    403 => UpdatePriceResponse::Forbidden(json),
                    404 => UpdatePriceResponse::NotFound(json),
                    _ => UpdatePriceResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListDealsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<DealResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<String>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdatePriceResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
