use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;

#[derive(Default)]
pub struct OrderRepositoryInMemory {
    orders: RwLock<Vec<Order>>,
}

impl OrderRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.orders.read().await.iter().rev().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        self.orders
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(RepositoryError::not_found)
    }

    async fn get_by_customer(&self, customer: &str) -> Result<Vec<Order>, RepositoryError> {
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .rev()
            .filter(|o| o.customer == customer)
            .cloned()
            .collect())
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut orders = self.orders.write().await;
        match orders.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => *existing = order.clone(),
            None => orders.push(order.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::{CartSummary, CartSummaryLine};
    use business::domain::catalog::value_objects::ProductId;
    use business::domain::order::value_objects::OrderStatus;
    use business::domain::shared::value_objects::SessionId;

    fn order_for(customer: &str) -> Order {
        let summary = CartSummary {
            lines: vec![CartSummaryLine {
                product_id: ProductId::new("Laptop"),
                quantity: 1,
                unit_price: Some(800),
                subtotal: 800,
            }],
            total: 800,
            unresolved: vec![],
        };
        Order::place(customer, SessionId::generate(), &summary).unwrap()
    }

    #[tokio::test]
    async fn should_list_newest_first() {
        let repository = OrderRepositoryInMemory::new();
        let first = order_for("customer");
        let second = order_for("admin");
        repository.save(&first).await.unwrap();
        repository.save(&second).await.unwrap();

        let orders = repository.get_all().await.unwrap();

        assert_eq!(orders[0].id, second.id);
        assert_eq!(orders[1].id, first.id);
    }

    #[tokio::test]
    async fn should_filter_by_customer() {
        let repository = OrderRepositoryInMemory::new();
        repository.save(&order_for("customer")).await.unwrap();
        repository.save(&order_for("admin")).await.unwrap();

        let orders = repository.get_by_customer("customer").await.unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].customer, "customer");
    }

    #[tokio::test]
    async fn should_replace_order_on_resave() {
        let repository = OrderRepositoryInMemory::new();
        let mut order = order_for("customer");
        repository.save(&order).await.unwrap();

        order.transition_to(OrderStatus::Shipped).unwrap();
        repository.save(&order).await.unwrap();

        let stored = repository.get_by_id(order.id).await.unwrap();
        assert_eq!(stored.status, OrderStatus::Shipped);
        assert_eq!(repository.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let repository = OrderRepositoryInMemory::new();

        let result = repository.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::NotFound));
    }
}
