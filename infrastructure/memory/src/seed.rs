//! Demo data loaded into the catalog at process start.

use business::domain::catalog::model::{Deal, Product};
use business::domain::catalog::value_objects::{Category, ProductId};

fn product(name: &str, price: u64, image: &str, description: &str, category: &str) -> Product {
    Product::from_repository(
        ProductId::new(name),
        price,
        format!("assets/{}", image),
        description.to_string(),
        Category::new(category),
    )
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            "Wireless Headphones",
            50,
            "headphones.jpg",
            "High-quality sound.",
            "Electronics",
        ),
        product(
            "Smart Watch",
            120,
            "smart_watch.jpg",
            "Keep track of your health.",
            "Electronics",
        ),
        product(
            "Laptop",
            800,
            "laptop.jpg",
            "Powerful performance.",
            "Computers",
        ),
        product(
            "The Rust Programming Language",
            40,
            "rust_book.jpg",
            "The official guide to Rust.",
            "Books",
        ),
        product(
            "Cotton T-Shirt",
            15,
            "t_shirt.jpg",
            "Soft everyday basic.",
            "Clothing",
        ),
        product(
            "Stand Mixer",
            250,
            "stand_mixer.jpg",
            "Bakes bread while you relax.",
            "Home & Kitchen",
        ),
    ]
}

/// Today's deals. Entries whose original price is not above the sale price are dropped.
pub fn deals() -> Vec<Deal> {
    [
        (
            product(
                "Bluetooth Speaker",
                30,
                "speaker.jpg",
                "Pocket-sized, room-filling sound.",
                "Electronics",
            ),
            45,
        ),
        (
            product(
                "Running Shoes",
                60,
                "running_shoes.jpg",
                "Lightweight trainers.",
                "Clothing",
            ),
            90,
        ),
    ]
    .into_iter()
    .filter_map(|(product, original_price)| Deal::new(product, original_price).ok())
    .collect()
}
