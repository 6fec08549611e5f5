use catalog_types::{CategoryFilter, FilterState, Product, SortOrder};
use std::collections::HashSet;

/// Category choices for a snapshot: `all`, then each distinct category in
/// first-seen order.
pub fn categories(all: &[Product]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut result = vec![CategoryFilter::All];

    for product in all {
        if seen.insert(product.category.as_str()) {
            result.push(CategoryFilter::only(product.category.as_str()));
        }
    }

    result
}

/// Build the derived view: category filter, then name search, then price sort.
///
/// The input is never reordered; the result is a fresh vector. The sort is
/// stable, so products with equal prices keep their input order.
pub fn filter_products(all: &[Product], filter: &FilterState) -> Vec<Product> {
    let needle = filter.trimmed_query().to_lowercase();

    let mut filtered: Vec<Product> = all
        .iter()
        .filter(|p| filter.category.matches(&p.category))
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match filter.sort {
        SortOrder::Asc => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::Desc => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    filtered
}
