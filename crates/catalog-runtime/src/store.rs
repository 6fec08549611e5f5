//! Product store: one fetch of the full collection, gated on readiness.
//!
//! The store publishes its state through a `watch` channel so a UI session
//! can redraw whenever the snapshot changes. Fetch failures never escape
//! `load`; they are logged and leave the collection empty.

use crate::ready::ReadySignal;
use crate::source::ProductSource;
use catalog_types::Product;
use std::sync::Arc;
use tokio::sync::watch;

/// Point-in-time view of the store.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub products: Arc<[Product]>,
    pub is_loading: bool,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            products: Arc::from(Vec::new()),
            is_loading: true,
        }
    }
}

pub struct ProductStore {
    source: Arc<dyn ProductSource>,
    ready: ReadySignal,
    state: watch::Sender<StoreSnapshot>,
}

impl ProductStore {
    pub fn new(source: Arc<dyn ProductSource>, ready: ReadySignal) -> Self {
        let (state, _) = watch::channel(StoreSnapshot::default());
        Self {
            source,
            ready,
            state,
        }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    /// Receiver that observes every snapshot published by [`ProductStore::load`].
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.state.subscribe()
    }

    /// Wait for readiness, then fetch the collection once.
    ///
    /// On success the collection is replaced; on failure it is left as it
    /// was. Either way `is_loading` ends up `false`. If the ready handle is
    /// dropped without signalling, nothing is fetched and the store stays
    /// loading.
    pub async fn load(&self) {
        let mut ready = self.ready.clone();
        if !ready.wait().await {
            tracing::warn!("ready signal dropped before the product API became available");
            return;
        }

        tracing::debug!(source = %self.source.describe(), "fetching products");

        match self.source.fetch_products().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "products loaded");
                self.state.send_replace(StoreSnapshot {
                    products: Arc::from(products),
                    is_loading: false,
                });
            }
            Err(err) => {
                tracing::error!(error = %err, source = %self.source.describe(), "Failed to fetch products");
                self.state.send_modify(|snapshot| snapshot.is_loading = false);
            }
        }
    }
}
