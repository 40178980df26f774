use super::errors::CatalogError;
use super::model::Product;
use super::value_objects::CategoryFilter;

/// Inclusive price bounds of a catalog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u64,
    max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Result<Self, CatalogError> {
        if min > max {
            return Err(CatalogError::InvalidPriceRange);
        }
        Ok(Self { min, max })
    }

    /// Bounds that accept every price.
    pub fn full() -> Self {
        Self {
            min: 0,
            max: u64::MAX,
        }
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub price_range: PriceRange,
    pub category: CategoryFilter,
}

impl FilterCriteria {
    pub fn matches_search(&self, product: &Product) -> bool {
        self.search_term.is_empty()
            || product
                .name()
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
    }

    pub fn matches_price(&self, product: &Product) -> bool {
        self.price_range.contains(product.price)
    }

    pub fn matches_category(&self, product: &Product) -> bool {
        self.category.accepts(&product.category)
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.matches_price(product) && self.matches_category(product)
    }
}

/// Visible subset of `products`: search, then price, then category.
/// Insertion order is preserved; no match yields an empty vector.
pub fn filter(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches_search(p))
        .filter(|p| criteria.matches_price(p))
        .filter(|p| criteria.matches_category(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::value_objects::{Category, ProductId};
    use proptest::prelude::*;

    fn product(name: &str, price: u64, category: &str) -> Product {
        Product::from_repository(
            ProductId::new(name),
            price,
            format!("assets/{}.jpg", name.to_lowercase()),
            String::new(),
            Category::new(category),
        )
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product("Wireless Headphones", 50, "Electronics"),
            product("Smart Watch", 120, "Electronics"),
            product("Laptop", 800, "Computers"),
            product("Rust in Action", 45, "Books"),
            product("Chef Knife", 35, "Home & Kitchen"),
        ]
    }

    #[test]
    fn should_find_laptop_by_partial_search() {
        let catalog = vec![product("Laptop", 800, "Computers")];
        let criteria = FilterCriteria {
            search_term: "lap".to_string(),
            price_range: PriceRange::new(0, 1000).unwrap(),
            category: CategoryFilter::All,
        };

        let result = filter(&catalog, &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name(), "Laptop");
    }

    #[test]
    fn should_ignore_search_case() {
        let criteria = FilterCriteria {
            search_term: "WATCH".to_string(),
            ..Default::default()
        };

        let result = filter(&sample_catalog(), &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name(), "Smart Watch");
    }

    #[test]
    fn should_keep_prices_on_range_bounds() {
        let criteria = FilterCriteria {
            price_range: PriceRange::new(45, 120).unwrap(),
            ..Default::default()
        };

        let names: Vec<String> = filter(&sample_catalog(), &criteria)
            .into_iter()
            .map(|p| p.name().to_string())
            .collect();

        assert_eq!(names, vec!["Wireless Headphones", "Smart Watch", "Rust in Action"]);
    }

    #[test]
    fn should_match_category_by_substring() {
        let criteria = FilterCriteria {
            category: CategoryFilter::Named("kitchen".to_string()),
            ..Default::default()
        };

        let result = filter(&sample_catalog(), &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name(), "Chef Knife");
    }

    #[test]
    fn should_return_empty_when_nothing_matches() {
        let criteria = FilterCriteria {
            search_term: "tractor".to_string(),
            ..Default::default()
        };

        assert!(filter(&sample_catalog(), &criteria).is_empty());
    }

    #[test]
    fn should_reject_inverted_price_range() {
        let result = PriceRange::new(100, 10);
        assert!(matches!(result.unwrap_err(), CatalogError::InvalidPriceRange));
    }

    fn arb_product() -> impl Strategy<Value = Product> {
        (
            "[A-Za-z ]{1,12}",
            1u64..2000,
            prop::sample::select(vec!["Electronics", "Books", "Clothing", "Home & Kitchen"]),
        )
            .prop_map(|(name, price, category)| product(&name, price, category))
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            "[a-z]{0,2}",
            0u64..2000,
            0u64..2000,
            prop::sample::select(vec!["All", "Electronics", "books", "kitchen"]),
        )
            .prop_map(|(search_term, a, b, category)| FilterCriteria {
                search_term,
                price_range: PriceRange::new(a.min(b), a.max(b)).unwrap(),
                category: CategoryFilter::from(category),
            })
    }

    proptest! {
        #[test]
        fn should_keep_exactly_the_matching_products(
            products in prop::collection::vec(arb_product(), 0..20),
            criteria in arb_criteria(),
        ) {
            let result = filter(&products, &criteria);

            prop_assert!(result.iter().all(|p| criteria.matches(p)));
            let expected: Vec<Product> = products.iter().filter(|p| criteria.matches(p)).cloned().collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn should_return_everything_for_default_criteria(
            products in prop::collection::vec(arb_product(), 0..20),
        ) {
            prop_assert_eq!(filter(&products, &FilterCriteria::default()), products);
        }
    }
}
