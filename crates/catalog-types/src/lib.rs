pub mod error;
pub mod filter;
pub mod flags;
pub mod product;

pub use error::{Error, Result};
pub use filter::{CategoryFilter, FilterState, SortOrder};
pub use flags::FeatureFlags;
pub use product::Product;
