pub mod console;
pub mod tui;

pub use console::{CategoryEntry, ListReport, render_categories_plain, render_list_plain};
pub use tui::TuiCatalogView;
