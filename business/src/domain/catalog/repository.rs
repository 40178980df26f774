use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Deal, Product};
use super::value_objects::ProductId;

/// The process-wide catalog shared by every session.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All products in insertion order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
    /// Appends a product; `Duplicated` when the id is already taken.
    async fn add(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Sets the price of every entry with this id; `NotFound` when none match.
    async fn update_price(
        &self,
        id: &ProductId,
        price: u64,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn get_deals(&self) -> Result<Vec<Deal>, RepositoryError>;
}
