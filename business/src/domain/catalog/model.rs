use serde::{Deserialize, Serialize};

use super::errors::CatalogError;
use super::value_objects::{Category, ProductId};

/// Lowest price an admin may set on a product.
pub const MIN_PRICE: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub price: u64,
    pub image_ref: String,
    pub description: String,
    pub category: Category,
}

pub struct NewProductProps {
    pub name: String,
    pub price: u64,
    pub image_ref: String,
    pub description: String,
    pub category: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, CatalogError> {
        let name = props.name.trim();
        if name.is_empty() {
            return Err(CatalogError::NameEmpty);
        }

        validate_price(props.price)?;

        Ok(Self {
            id: ProductId::new(name),
            price: props.price,
            image_ref: props.image_ref,
            description: props.description,
            category: Category::new(props.category.trim()),
        })
    }

    /// Constructor for seed data and stored entries (no validation).
    pub fn from_repository(
        id: ProductId,
        price: u64,
        image_ref: String,
        description: String,
        category: Category,
    ) -> Self {
        Self {
            id,
            price,
            image_ref,
            description,
            category,
        }
    }

    pub fn name(&self) -> &str {
        self.id.as_str()
    }
}

pub fn validate_price(price: u64) -> Result<(), CatalogError> {
    if price < MIN_PRICE {
        return Err(CatalogError::PriceTooLow);
    }
    Ok(())
}

/// A discounted item shown in the "today's deals" strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub product: Product,
    pub original_price: u64,
}

impl Deal {
    pub fn new(product: Product, original_price: u64) -> Result<Self, CatalogError> {
        if original_price <= product.price {
            return Err(CatalogError::DealNotDiscounted);
        }
        Ok(Self {
            product,
            original_price,
        })
    }

    pub fn savings(&self) -> u64 {
        self.original_price - self.product.price
    }
}
