use poem_openapi::Object;

use business::domain::catalog::model::{Deal, Product};

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product name, also its identifier
    pub name: String,
    /// Price in whole currency units
    pub price: u64,
    /// Opaque image reference
    pub image_ref: String,
    pub description: String,
    pub category: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            name: product.id.to_string(),
            price: product.price,
            image_ref: product.image_ref,
            description: product.description,
            category: product.category.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DealResponse {
    pub product: ProductResponse,
    /// Price before the discount
    pub original_price: u64,
    pub savings: u64,
}

impl From<Deal> for DealResponse {
    fn from(deal: Deal) -> Self {
        let savings = deal.savings();
        Self {
            product: deal.product.into(),
            original_price: deal.original_price,
            savings,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty, must be unique)
    pub name: String,
    /// Price, at least 1
    pub price: u64,
    #[oai(default)]
    pub image_ref: String,
    #[oai(default)]
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdatePriceRequest {
    /// New price, at least 1
    pub price: u64,
}
