//! View models for the product surface.
//!
//! Everything here is plain data derived from a store snapshot, the filter
//! state and the current grid frame. Renderers (TUI, console) only read it.

use catalog_engine::{DerivedView, GridFrame};
use catalog_types::{FeatureFlags, FilterState, Product};
use serde::Serialize;

pub const LOADING_MESSAGE: &str = "Loading products...";
pub const EMPTY_MESSAGE: &str = "No products found. Try adjusting your filters.";

/// Which of the three mutually exclusive bodies the surface shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceState {
    Loading,
    Empty,
    Populated,
}

impl SurfaceState {
    pub fn derive(is_loading: bool, shown: usize) -> Self {
        if is_loading {
            SurfaceState::Loading
        } else if shown == 0 {
            SurfaceState::Empty
        } else {
            SurfaceState::Populated
        }
    }

    /// Next state after a store or filter change. Once the surface has left
    /// `Loading` it moves only between `Empty` and `Populated`.
    pub fn transition(self, is_loading: bool, shown: usize) -> Self {
        match self {
            SurfaceState::Loading => Self::derive(is_loading, shown),
            SurfaceState::Empty | SurfaceState::Populated => Self::derive(false, shown),
        }
    }

    pub fn is_loading(self) -> bool {
        self == SurfaceState::Loading
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardViewModel {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    /// Present only when the ratings flag is on
    pub rating: Option<String>,
    pub image: String,
}

impl CardViewModel {
    pub fn from_product(product: &Product, flags: FeatureFlags) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price_label(),
            rating: flags.show_ratings.then(|| product.rating_label()),
            image: product.image.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CellViewModel {
    Card(CardViewModel),
    /// Keeps a short last row aligned to the column grid
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowViewModel {
    pub index: usize,
    pub top: u64,
    pub height: u32,
    pub cells: Vec<CellViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterBarViewModel {
    pub query: String,
    pub category: String,
    pub sort: String,
}

impl FilterBarViewModel {
    pub fn from_filter(filter: &FilterState) -> Self {
        Self {
            query: filter.query.clone(),
            category: filter.category.label(),
            sort: filter.sort.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogViewModel {
    pub state: SurfaceState,
    pub filters: FilterBarViewModel,
    /// `Showing X of Y products`; hidden while loading
    pub summary: Option<String>,
    /// Loading or empty-state text; `None` when populated
    pub message: Option<&'static str>,
    pub columns: usize,
    pub row_count: usize,
    pub scroll_offset: u64,
    pub total_height: u64,
    /// Materialized rows only
    pub rows: Vec<RowViewModel>,
}

impl CatalogViewModel {
    pub fn build(
        state: SurfaceState,
        view: &DerivedView,
        filter: &FilterState,
        frame: &GridFrame,
        flags: FeatureFlags,
    ) -> Self {
        let summary = (!state.is_loading()).then(|| view.summary());
        let message = match state {
            SurfaceState::Loading => Some(LOADING_MESSAGE),
            SurfaceState::Empty => Some(EMPTY_MESSAGE),
            SurfaceState::Populated => None,
        };

        let rows = if state == SurfaceState::Populated {
            frame
                .window
                .rows
                .iter()
                .map(|row| RowViewModel {
                    index: row.index,
                    top: row.top,
                    height: row.height,
                    cells: frame
                        .row_slots(&view.products, row.index)
                        .into_iter()
                        .map(|slot| match slot {
                            Some(product) => {
                                CellViewModel::Card(CardViewModel::from_product(product, flags))
                            }
                            None => CellViewModel::Placeholder,
                        })
                        .collect(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            state,
            filters: FilterBarViewModel::from_filter(filter),
            summary,
            message,
            columns: frame.columns,
            row_count: frame.row_count,
            scroll_offset: frame.scroll_offset,
            total_height: frame.total_height,
            rows,
        }
    }

    /// Materialized row covering content line `y`, with the line offset inside it.
    pub fn row_at(&self, y: u64) -> Option<(&RowViewModel, u32)> {
        self.rows
            .iter()
            .find(|row| y >= row.top && y < row.top + u64::from(row.height))
            .map(|row| (row, (y - row.top) as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_engine::{GridMetrics, VirtualGrid, derive_view};
    use catalog_testing::fixtures::{generated_products, mock_products};
    use catalog_types::CategoryFilter;

    fn frame_for(view: &DerivedView, width: u32, height: u32) -> GridFrame {
        let mut grid = VirtualGrid::new(GridMetrics::web());
        grid.set_item_count(view.shown());
        grid.resize(width, height).clone()
    }

    #[test]
    fn test_initial_loading_state() {
        assert_eq!(SurfaceState::derive(true, 0), SurfaceState::Loading);
        assert_eq!(SurfaceState::derive(false, 0), SurfaceState::Empty);
        assert_eq!(SurfaceState::derive(false, 3), SurfaceState::Populated);
    }

    #[test]
    fn test_never_returns_to_loading() {
        let state = SurfaceState::Loading.transition(false, 4);
        assert_eq!(state, SurfaceState::Populated);

        let state = state.transition(true, 0);
        assert_eq!(state, SurfaceState::Empty);

        let state = state.transition(true, 2);
        assert_eq!(state, SurfaceState::Populated);
    }

    #[test]
    fn test_loading_hides_summary() {
        let view = derive_view(&[], &FilterState::new());
        let frame = frame_for(&view, 1200, 600);
        let vm = CatalogViewModel::build(
            SurfaceState::Loading,
            &view,
            &FilterState::new(),
            &frame,
            FeatureFlags::default(),
        );

        assert_eq!(vm.summary, None);
        assert_eq!(vm.message, Some(LOADING_MESSAGE));
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn test_empty_state_keeps_summary() {
        let mut filter = FilterState::new();
        filter.set_query("nothing matches this");
        let view = derive_view(&mock_products(), &filter);
        let frame = frame_for(&view, 1200, 600);
        let vm = CatalogViewModel::build(
            SurfaceState::derive(false, view.shown()),
            &view,
            &filter,
            &frame,
            FeatureFlags::default(),
        );

        assert_eq!(vm.state, SurfaceState::Empty);
        assert_eq!(vm.summary.as_deref(), Some("Showing 0 of 4 products"));
        assert_eq!(vm.message, Some(EMPTY_MESSAGE));
    }

    #[test]
    fn test_short_last_row_gets_placeholders() {
        let products = generated_products(5);
        let filter = FilterState::new();
        let view = derive_view(&products, &filter);
        // 32 + 4 * 256 -> 4 columns
        let frame = frame_for(&view, 1056, 800);
        let vm = CatalogViewModel::build(
            SurfaceState::Populated,
            &view,
            &filter,
            &frame,
            FeatureFlags::default(),
        );

        assert_eq!(vm.columns, 4);
        assert_eq!(vm.rows.len(), 2);
        let last = &vm.rows[1].cells;
        assert!(matches!(last[0], CellViewModel::Card(_)));
        assert_eq!(
            last.iter()
                .filter(|c| **c == CellViewModel::Placeholder)
                .count(),
            3
        );
    }

    #[test]
    fn test_ratings_follow_flag() {
        let product = &mock_products()[0];

        let hidden = CardViewModel::from_product(product, FeatureFlags::default());
        assert_eq!(hidden.rating, None);

        let shown = CardViewModel::from_product(product, FeatureFlags::default().with_ratings(true));
        assert_eq!(shown.rating.as_deref(), Some("⭐ 4.5"));
        assert_eq!(shown.price, "$999.99");
    }

    #[test]
    fn test_filter_bar_labels() {
        let mut filter = FilterState::new();
        assert_eq!(
            FilterBarViewModel::from_filter(&filter).category,
            "All Categories"
        );

        filter.set_category(CategoryFilter::only("kitchen"));
        filter.set_sort(filter.sort.toggled());
        let bar = FilterBarViewModel::from_filter(&filter);
        assert_eq!(bar.category, "Kitchen");
        assert_eq!(bar.sort, "Price: High → Low");
    }

    #[test]
    fn test_row_at_maps_content_lines() {
        let products = generated_products(12);
        let filter = FilterState::new();
        let view = derive_view(&products, &filter);
        let frame = frame_for(&view, 1056, 600);
        let vm = CatalogViewModel::build(
            SurfaceState::Populated,
            &view,
            &filter,
            &frame,
            FeatureFlags::default(),
        );

        let (row, line) = vm.row_at(300).unwrap();
        assert_eq!(row.index, 1);
        assert_eq!(line, 4);
        assert!(vm.row_at(vm.total_height).is_none());
    }
}
