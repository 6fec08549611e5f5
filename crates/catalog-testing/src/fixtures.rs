//! Sample product collections.

use anyhow::Result;
use catalog_types::Product;
use std::fs;
use std::path::{Path, PathBuf};

fn product(id: &str, name: &str, price: f64, category: &str, rating: f64, image: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        category: category.to_string(),
        rating,
        image: format!("https://example.com/{}.jpg", image),
    }
}

/// The four-item collection served by the mock API.
///
/// Two electronics items, one kitchen, one office; deliberately not in
/// price order.
pub fn mock_products() -> Vec<Product> {
    vec![
        product("1", "Laptop", 999.99, "electronics", 4.5, "laptop"),
        product("2", "Coffee Maker", 49.99, "kitchen", 4.2, "coffee"),
        product("3", "Desk Chair", 199.99, "office", 4.8, "chair"),
        product("4", "Wireless Mouse", 29.99, "electronics", 4.0, "mouse"),
    ]
}

/// `count` products named `Product N`, priced `10 + i`, all in category `test`.
pub fn generated_products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            id: (i + 1).to_string(),
            name: format!("Product {}", i + 1),
            price: 10.0 + i as f64,
            category: "test".to_string(),
            rating: 4.0,
            image: format!("https://example.com/{}.jpg", i + 1),
        })
        .collect()
}

/// Write `products` as the JSON array the API would serve.
pub fn write_products_file(dir: &Path, file_name: &str, products: &[Product]) -> Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, serde_json::to_string_pretty(products)?)?;
    Ok(path)
}
