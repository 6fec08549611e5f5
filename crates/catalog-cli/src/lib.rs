// NOTE: catalog host architecture
//
// The host shell owns nothing but wiring: it reads config + flags, builds the
// product store with an explicit ready signal, and embeds the product surface.
// - catalog-runtime: store, sources, config (async, tokio)
// - catalog-engine: pure derivation (filter/sort, columns, row window)
// - presentation: view models shared by the TUI and the one-shot list output
//
// Feature flags travel as a plain `FeatureFlags` value passed to the surface;
// there is no global toggle state.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
