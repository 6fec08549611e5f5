use crate::args::Cli;
use anyhow::{Context, Result};
use catalog_runtime::{
    CatalogConfig, ProductStore, ReadyHandle, ready_channel, resolve_config_path,
};
use catalog_types::FeatureFlags;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resolved configuration for one invocation: config file merged with CLI overrides.
pub struct ExecutionContext {
    config_path: PathBuf,
    config: CatalogConfig,
}

impl ExecutionContext {
    pub fn new(config_path: PathBuf, config: CatalogConfig) -> Self {
        Self {
            config_path,
            config,
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = resolve_config_path(cli.config.as_deref())?;
        let mut config = CatalogConfig::load_from(&config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?;

        if let Some(endpoint) = &cli.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(path) = &cli.products_file {
            config.products_file = Some(path.clone());
        }
        if cli.show_ratings {
            config.features.show_ratings = true;
        }

        Ok(Self::new(config_path, config))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn flags(&self) -> FeatureFlags {
        self.config.features
    }

    /// Build a store over the configured source. Nothing is fetched until
    /// the returned handle is marked ready and `load` runs.
    pub fn product_store(&self) -> Result<(ReadyHandle, Arc<ProductStore>)> {
        let source = self.config.product_source()?;
        tracing::debug!(source = %source.describe(), "product source configured");

        let (handle, ready) = ready_channel();
        Ok((handle, Arc::new(ProductStore::new(source, ready))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "endpoint = \"http://shop.local\"\n\n[features]\nshow_ratings = false\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "catalog",
            "--config",
            path.to_str().unwrap(),
            "--endpoint",
            "http://127.0.0.1:9999",
            "--show-ratings",
            "list",
        ]);
        let ctx = ExecutionContext::from_cli(&cli).unwrap();

        assert_eq!(ctx.config().endpoint, "http://127.0.0.1:9999");
        assert!(ctx.flags().show_ratings);
        assert_eq!(ctx.config_path(), path.as_path());
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let cli = Cli::parse_from(["catalog", "--config", path.to_str().unwrap()]);
        let ctx = ExecutionContext::from_cli(&cli).unwrap();

        assert_eq!(ctx.config(), &CatalogConfig::default());
        assert!(!ctx.flags().show_ratings);
    }

    #[test]
    fn test_store_starts_loading() {
        let ctx = ExecutionContext::new(PathBuf::from("unused.toml"), CatalogConfig::default());
        let (_handle, store) = ctx.product_store().unwrap();
        assert!(store.is_loading());
    }
}
