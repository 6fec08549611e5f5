//! In-process mock of the product backend.
//!
//! Serves `GET /api/products` on an ephemeral localhost port. The server
//! task is aborted when the `MockApi` is dropped.

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use catalog_types::Product;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::task::JoinHandle;

/// What the mock answers to every product request.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// 200 with the products as a JSON array
    Products(Vec<Product>),
    /// Bare status code with no body
    Status(u16),
}

#[derive(Clone)]
struct MockState {
    response: Arc<MockResponse>,
    hits: Arc<AtomicUsize>,
}

pub struct MockApi {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    server: JoinHandle<()>,
}

impl MockApi {
    /// Bind to `127.0.0.1:0` and start serving.
    pub async fn start(response: MockResponse) -> Result<Self> {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            response: Arc::new(response),
            hits: hits.clone(),
        };

        let app = Router::new()
            .route("/api/products", get(products))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr, hits, server })
    }

    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:41234`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of product requests served so far.
    pub fn request_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn products(State(state): State<MockState>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    match state.response.as_ref() {
        MockResponse::Products(products) => Json(products.clone()).into_response(),
        MockResponse::Status(code) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
    }
}
