pub mod formatters;
pub mod renderers;
pub mod view_models;

pub use view_models::{
    CardViewModel, CatalogViewModel, CellViewModel, EMPTY_MESSAGE, FilterBarViewModel,
    LOADING_MESSAGE, RowViewModel, SurfaceState,
};
