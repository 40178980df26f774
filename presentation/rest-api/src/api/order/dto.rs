use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::{Order, OrderLine};

#[derive(Debug, Clone, Object)]
pub struct OrderLineResponse {
    pub product_id: String,
    /// Catalog price at checkout
    pub unit_price: u64,
    pub quantity: u64,
    pub subtotal: u64,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            subtotal: line.subtotal,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    pub id: String,
    pub customer: String,
    pub lines: Vec<OrderLineResponse>,
    pub total: u64,
    /// confirmed, shipped, delivered or cancelled
    pub status: String,
    pub confirmation_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            customer: order.customer,
            lines: order.lines.into_iter().map(|l| l.into()).collect(),
            total: order.total,
            status: order.status.to_string(),
            confirmation_code: order.confirmation_code,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateOrderStatusRequest {
    /// Target status
    pub status: String,
}
