use chrono::{DateTime, Utc};
use rand::{Rng, distr::Alphanumeric};
use uuid::Uuid;

use crate::domain::cart::model::CartSummary;
use crate::domain::catalog::value_objects::ProductId;
use crate::domain::shared::value_objects::SessionId;

use super::errors::OrderError;
use super::value_objects::OrderStatus;

const CONFIRMATION_PREFIX: &str = "ORD-";
const CONFIRMATION_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub unit_price: u64,
    pub quantity: u64,
    pub subtotal: u64,
}

/// Snapshot of a cart at checkout, priced at that moment.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub customer: String,
    pub session_id: SessionId,
    pub lines: Vec<OrderLine>,
    pub total: u64,
    pub status: OrderStatus,
    pub confirmation_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Places a confirmed order from the resolvable lines of `summary`.
    pub fn place(
        customer: impl Into<String>,
        session_id: SessionId,
        summary: &CartSummary,
    ) -> Result<Self, OrderError> {
        let lines: Vec<OrderLine> = summary
            .lines
            .iter()
            .filter_map(|l| {
                l.unit_price.map(|unit_price| OrderLine {
                    product_id: l.product_id.clone(),
                    unit_price,
                    quantity: l.quantity,
                    subtotal: l.subtotal,
                })
            })
            .collect();

        if lines.is_empty() {
            return Err(OrderError::CartEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            customer: customer.into(),
            session_id,
            total: lines
                .iter()
                .fold(0u64, |acc, l| acc.saturating_add(l.subtotal)),
            lines,
            status: OrderStatus::Confirmed,
            confirmation_code: generate_confirmation_code(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn transition_to(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidStatusTransition);
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn generate_confirmation_code() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CONFIRMATION_LENGTH)
        .map(char::from)
        .collect();
    format!("{}{}", CONFIRMATION_PREFIX, suffix.to_uppercase())
}
