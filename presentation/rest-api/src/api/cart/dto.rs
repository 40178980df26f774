use poem_openapi::Object;

use business::domain::cart::model::{CartSummary, CartSummaryLine};

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    /// Name of a catalog product
    pub product_id: String,
    /// Units to add, 1 to 5
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub product_id: String,
    pub quantity: u64,
    /// Current catalog price, absent when the product no longer exists
    #[oai(skip_serializing_if_is_none)]
    pub unit_price: Option<u64>,
    pub subtotal: u64,
}

impl From<CartSummaryLine> for CartLineResponse {
    fn from(line: CartSummaryLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            subtotal: line.subtotal,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    pub total: u64,
    /// Lines whose product is missing from the catalog; priced at 0
    pub unresolved: Vec<String>,
}

impl From<CartSummary> for CartResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            lines: summary.lines.into_iter().map(|l| l.into()).collect(),
            total: summary.total,
            unresolved: summary
                .unresolved
                .into_iter()
                .map(|id| id.to_string())
                .collect(),
        }
    }
}
