use serde::{Deserialize, Serialize};

use crate::domain::catalog::model::Product;
use crate::domain::catalog::value_objects::ProductId;

use super::value_objects::Quantity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u64,
}

/// Product quantities of one session. Lines keep first-add order and
/// never hold a zero quantity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges into the existing line for `product_id`, or appends a new one.
    pub fn add(&mut self, product_id: ProductId, quantity: Quantity) {
        let amount = u64::from(quantity.value());
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => line.quantity += amount,
            None => self.lines.push(CartLine {
                product_id,
                quantity: amount,
            }),
        }
    }

    pub fn quantity_of(&self, product_id: &ProductId) -> u64 {
        self.lines
            .iter()
            .find(|l| &l.product_id == product_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price * quantity`. Lines `price_of` cannot resolve add nothing.
    pub fn total<F>(&self, price_of: F) -> u64
    where
        F: Fn(&ProductId) -> Option<u64>,
    {
        self.lines
            .iter()
            .filter_map(|l| price_of(&l.product_id).map(|price| price.saturating_mul(l.quantity)))
            .fold(0u64, |acc, subtotal| acc.saturating_add(subtotal))
    }

    /// Prices every line against `catalog`.
    pub fn summarize(&self, catalog: &[Product]) -> CartSummary {
        let price_of =
            |id: &ProductId| catalog.iter().find(|p| &p.id == id).map(|p| p.price);

        let lines = self
            .lines
            .iter()
            .map(|l| {
                let unit_price = price_of(&l.product_id);
                CartSummaryLine {
                    product_id: l.product_id.clone(),
                    quantity: l.quantity,
                    unit_price,
                    subtotal: unit_price
                        .map(|p| p.saturating_mul(l.quantity))
                        .unwrap_or(0),
                }
            })
            .collect::<Vec<_>>();

        let unresolved = lines
            .iter()
            .filter(|l| l.unit_price.is_none())
            .map(|l| l.product_id.clone())
            .collect();

        CartSummary {
            total: self.total(price_of),
            lines,
            unresolved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummaryLine {
    pub product_id: ProductId,
    pub quantity: u64,
    pub unit_price: Option<u64>,
    pub subtotal: u64,
}

/// Cart view: priced lines, grand total and ids missing from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub lines: Vec<CartSummaryLine>,
    pub total: u64,
    pub unresolved: Vec<ProductId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::value_objects::Category;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    fn laptop() -> Product {
        Product::from_repository(
            ProductId::new("Laptop"),
            800,
            "assets/laptop.jpg".to_string(),
            "Powerful performance.".to_string(),
            Category::new("Computers"),
        )
    }

    #[test]
    fn should_merge_repeated_adds() {
        let mut cart = Cart::new();

        cart.add(ProductId::new("Laptop"), qty(2));
        cart.add(ProductId::new("Laptop"), qty(1));

        assert_eq!(cart.quantity_of(&ProductId::new("Laptop")), 3);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.summarize(&[laptop()]).total, 2400);
    }

    #[test]
    fn should_keep_first_add_order() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("Smart Watch"), qty(1));
        cart.add(ProductId::new("Laptop"), qty(1));
        cart.add(ProductId::new("Smart Watch"), qty(1));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["Smart Watch", "Laptop"]);
    }

    #[test]
    fn should_price_unknown_products_at_zero() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("Laptop"), qty(1));
        cart.add(ProductId::new("Discontinued Phone"), qty(4));

        let summary = cart.summarize(&[laptop()]);

        assert_eq!(summary.total, 800);
        assert_eq!(summary.unresolved, vec![ProductId::new("Discontinued Phone")]);
        assert_eq!(summary.lines[1].subtotal, 0);
        assert!(summary.lines[1].unit_price.is_none());
    }

    #[test]
    fn should_empty_cart_on_clear() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("Laptop"), qty(5));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.summarize(&[laptop()]).total, 0);
    }

    proptest! {
        #[test]
        fn should_sum_quantities_of_every_add(amounts in prop::collection::vec(1u32..=5, 1..30)) {
            let mut cart = Cart::new();
            for amount in &amounts {
                cart.add(ProductId::new("Laptop"), qty(*amount));
            }

            let expected: u64 = amounts.iter().map(|a| u64::from(*a)).sum();
            prop_assert_eq!(cart.quantity_of(&ProductId::new("Laptop")), expected);
            prop_assert_eq!(cart.lines().len(), 1);
        }

        #[test]
        fn should_total_disjoint_carts_additively(
            left in prop::collection::vec((0usize..5, 1u32..=5), 0..10),
            right in prop::collection::vec((5usize..10, 1u32..=5), 0..10),
            prices in prop::collection::vec(1u64..1000, 10),
        ) {
            let table: HashMap<ProductId, u64> = prices
                .iter()
                .enumerate()
                .map(|(i, p)| (ProductId::new(format!("item-{i}")), *p))
                .collect();
            let price_of = |id: &ProductId| table.get(id).copied();

            let mut cart_a = Cart::new();
            let mut cart_b = Cart::new();
            let mut union = Cart::new();
            for (i, amount) in &left {
                cart_a.add(ProductId::new(format!("item-{i}")), qty(*amount));
                union.add(ProductId::new(format!("item-{i}")), qty(*amount));
            }
            for (i, amount) in &right {
                cart_b.add(ProductId::new(format!("item-{i}")), qty(*amount));
                union.add(ProductId::new(format!("item-{i}")), qty(*amount));
            }

            prop_assert_eq!(
                union.total(price_of),
                cart_a.total(price_of) + cart_b.total(price_of)
            );
        }
    }
}
