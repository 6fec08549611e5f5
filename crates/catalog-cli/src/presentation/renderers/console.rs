use crate::presentation::formatters::fit;
use crate::presentation::view_models::{CardViewModel, EMPTY_MESSAGE, SurfaceState};
use catalog_engine::{DerivedView, row_count};
use catalog_types::{CategoryFilter, FeatureFlags, Product};
use owo_colors::OwoColorize;
use serde::Serialize;

const NAME_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 14;
const PRICE_WIDTH: usize = 10;

/// One-shot result of `catalog list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListReport {
    pub state: SurfaceState,
    pub summary: String,
    pub total: usize,
    pub shown: usize,
    pub columns: usize,
    pub row_count: usize,
    pub categories: Vec<String>,
    pub products: Vec<Product>,
}

impl ListReport {
    pub fn new(state: SurfaceState, view: &DerivedView, columns: usize) -> Self {
        Self {
            state,
            summary: view.summary(),
            total: view.total,
            shown: view.shown(),
            columns,
            row_count: row_count(view.shown(), columns),
            categories: view.categories.iter().map(|c| c.to_string()).collect(),
            products: view.products.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEntry {
    pub value: String,
    pub label: String,
}

impl From<&CategoryFilter> for CategoryEntry {
    fn from(category: &CategoryFilter) -> Self {
        Self {
            value: category.to_string(),
            label: category.label(),
        }
    }
}

pub fn render_list_plain(report: &ListReport, flags: FeatureFlags, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&report.summary);
    out.push('\n');

    if report.state == SurfaceState::Empty {
        out.push('\n');
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }

    out.push('\n');
    for product in &report.products {
        let card = CardViewModel::from_product(product, flags);
        out.push_str(&render_card_line(&card, color));
        out.push('\n');
    }
    out
}

fn render_card_line(card: &CardViewModel, color: bool) -> String {
    let name = fit(&card.name, NAME_WIDTH);
    let category = fit(&card.category, CATEGORY_WIDTH);
    let price = format!("{:>width$}", card.price, width = PRICE_WIDTH);

    let mut line = if color {
        format!(
            "{} {} {}",
            name.bold(),
            category.dimmed(),
            price.green()
        )
    } else {
        format!("{} {} {}", name, category, price)
    };

    if let Some(rating) = &card.rating {
        line.push_str("  ");
        if color {
            line.push_str(&rating.yellow().to_string());
        } else {
            line.push_str(rating);
        }
    }
    line.trim_end().to_string()
}

pub fn render_categories_plain(entries: &[CategoryEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("{:<16} {}\n", entry.value, entry.label));
    }
    out
}
