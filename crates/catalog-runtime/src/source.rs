use crate::{Error, Result};
use async_trait::async_trait;
use catalog_types::Product;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Path of the product collection endpoint, relative to the API host.
pub const PRODUCTS_PATH: &str = "/api/products";

/// Anything that can hand back the full product collection.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Short description for logs (URL, file path, ...).
    fn describe(&self) -> String;
}

/// `GET {base}/api/products` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpProductSource {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = Url::parse(base_url)?.join(PRODUCTS_PATH)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        Ok(response.json::<Vec<Product>>().await?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Product collection stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct FileProductSource {
    path: PathBuf,
}

impl FileProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductSource for FileProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryProductSource {
    products: Vec<Product>,
}

impl MemoryProductSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductSource for MemoryProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} products)", self.products.len())
    }
}
