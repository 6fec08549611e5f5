use crate::source::{FileProductSource, HttpProductSource, ProductSource};
use crate::{Error, Result};
use catalog_types::FeatureFlags;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CATALOG_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.catalog/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CATALOG_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("catalog").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".catalog").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the product API; `/api/products` is appended
    pub endpoint: String,
    /// Read products from this JSON file instead of the API
    pub products_file: Option<PathBuf>,
    pub request_timeout_secs: Option<u64>,
    pub features: FeatureFlags,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            products_file: None,
            request_timeout_secs: None,
            features: FeatureFlags::default(),
        }
    }
}

impl CatalogConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: CatalogConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Build the product source this config points at.
    pub fn product_source(&self) -> Result<Arc<dyn ProductSource>> {
        if let Some(path) = &self.products_file {
            return Ok(Arc::new(FileProductSource::new(path.clone())));
        }

        let timeout = self.request_timeout_secs.map(Duration::from_secs);
        Ok(Arc::new(HttpProductSource::with_timeout(
            &self.endpoint,
            timeout,
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert!(!config.features.show_ratings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[features]\nshow_ratings = true\n").unwrap();

        let config = CatalogConfig::load_from(&path).unwrap();
        assert!(config.features.show_ratings);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"endpoint = "http://localhost:9999"
products_file = "/tmp/products.json"
request_timeout_secs = 5

[features]
show_ratings = true
"#,
        )
        .unwrap();

        let config = CatalogConfig::load_from(&path).unwrap();
        assert_eq!(
            config,
            CatalogConfig {
                endpoint: "http://localhost:9999".to_string(),
                products_file: Some(PathBuf::from("/tmp/products.json")),
                request_timeout_secs: Some(5),
                features: FeatureFlags { show_ratings: true },
            }
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "endpoint = [").unwrap();

        assert!(matches!(
            CatalogConfig::load_from(&path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(Some("/etc/catalog.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/etc/catalog.toml"));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config = CatalogConfig {
            endpoint: "::nope".to_string(),
            ..CatalogConfig::default()
        };
        assert!(config.product_source().is_err());
    }
}
