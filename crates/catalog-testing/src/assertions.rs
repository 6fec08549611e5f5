//! Custom assertions for catalog-specific validation.
//!
//! Operate on the JSON emitted by `catalog list --format json`.

use anyhow::{Context, Result};
use serde_json::Value;

fn products(json: &Value) -> Result<&Vec<Value>> {
    json["products"]
        .as_array()
        .context("Expected 'products' array in JSON")
}

/// Assert that JSON output contains expected number of products.
pub fn assert_product_count(json: &Value, expected: usize) -> Result<()> {
    let products = products(json)?;

    if products.len() != expected {
        anyhow::bail!("Expected {} products, got {}", expected, products.len());
    }

    Ok(())
}

/// Assert the product names, in display order.
pub fn assert_product_names(json: &Value, expected: &[&str]) -> Result<()> {
    let names: Vec<&str> = products(json)?
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();

    if names != expected {
        anyhow::bail!("Expected products {:?}, got {:?}", expected, names);
    }

    Ok(())
}

/// Assert that every listed product belongs to `category`.
pub fn assert_all_in_category(json: &Value, category: &str) -> Result<()> {
    for (i, product) in products(json)?.iter().enumerate() {
        let actual = product["category"]
            .as_str()
            .with_context(|| format!("Product {} missing category", i))?;

        if actual != category {
            anyhow::bail!(
                "Product {} is in category {} but expected {}",
                i,
                actual,
                category
            );
        }
    }

    Ok(())
}

/// Assert that prices never decrease (or never increase when `descending`).
pub fn assert_sorted_by_price(json: &Value, descending: bool) -> Result<()> {
    let prices: Vec<f64> = products(json)?
        .iter()
        .filter_map(|p| p["price"].as_f64())
        .collect();

    let ordered = prices.windows(2).all(|w| {
        if descending {
            w[0] >= w[1]
        } else {
            w[0] <= w[1]
        }
    });

    if !ordered {
        anyhow::bail!("Prices out of order: {:?}", prices);
    }

    Ok(())
}
