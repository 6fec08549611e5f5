pub mod config;
pub mod error;
pub mod ready;
pub mod source;
pub mod store;

pub use config::{CatalogConfig, resolve_config_path};
pub use error::{Error, Result};
pub use ready::{ReadyHandle, ReadySignal, ready_channel};
pub use source::{FileProductSource, HttpProductSource, MemoryProductSource, ProductSource};
pub use store::{ProductStore, StoreSnapshot};
