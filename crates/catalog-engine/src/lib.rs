// Engine module - pure derivation from the fetched collection to what is on screen
// Store snapshot -> pipeline (derived view) -> grid (columns -> rows -> window)

pub mod grid;
pub mod layout;
pub mod pipeline;
pub mod window;

pub use grid::{GridFrame, VirtualGrid, row_slots};
pub use layout::{GridMetrics, column_count, row_count};
pub use pipeline::{categories, filter_products};
pub use window::{Viewport, VirtualRow, Window, compute_window};

use catalog_types::{FilterState, Product};

// Façade API - Stable public interface for CLI layer

/// Derive the displayed view and the category list in one pass over a snapshot.
pub fn derive_view(all: &[Product], filter: &FilterState) -> DerivedView {
    DerivedView {
        products: filter_products(all, filter),
        categories: categories(all),
        total: all.len(),
    }
}

/// Output of [`derive_view`].
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub products: Vec<Product>,
    pub categories: Vec<catalog_types::CategoryFilter>,
    /// Size of the unfiltered collection
    pub total: usize,
}

impl DerivedView {
    pub fn shown(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// `Showing X of Y products`
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.shown(), self.total)
    }
}
