use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::catalog::model::{Deal, Product};
use business::domain::catalog::repository::CatalogRepository;
use business::domain::catalog::value_objects::ProductId;
use business::domain::errors::RepositoryError;

use crate::seed;

/// Process-wide catalog. Writers are serialized; the last write wins.
pub struct CatalogRepositoryInMemory {
    products: RwLock<Vec<Product>>,
    deals: RwLock<Vec<Deal>>,
}

impl CatalogRepositoryInMemory {
    pub fn new(products: Vec<Product>, deals: Vec<Deal>) -> Self {
        Self {
            products: RwLock::new(products),
            deals: RwLock::new(deals),
        }
    }

    /// Catalog holding the demo seed data.
    pub fn seeded() -> Self {
        Self::new(seed::products(), seed::deals())
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn add(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Err(RepositoryError::duplicated());
        }
        products.push(product.clone());
        Ok(())
    }

    async fn update_price(
        &self,
        id: &ProductId,
        price: u64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.products.write().await;
        let updated: Vec<Product> = products
            .iter_mut()
            .filter(|p| &p.id == id)
            .map(|p| {
                p.price = price;
                p.clone()
            })
            .collect();

        if updated.is_empty() {
            return Err(RepositoryError::not_found());
        }
        Ok(updated)
    }

    async fn get_deals(&self) -> Result<Vec<Deal>, RepositoryError> {
        Ok(self.deals.read().await.clone())
    }
}
