use catalog_runtime::{
    Error, HttpProductSource, ProductSource, ProductStore, ReadySignal, ready_channel,
};
use catalog_testing::fixtures::mock_products;
use catalog_testing::{MockApi, MockResponse};
use std::sync::Arc;

#[tokio::test]
async fn test_store_loads_mock_set_over_http() {
    let api = MockApi::start(MockResponse::Products(mock_products()))
        .await
        .expect("start mock api");
    let source = HttpProductSource::new(&api.base_url()).expect("valid endpoint");
    let store = ProductStore::new(Arc::new(source), ReadySignal::ready());

    store.load().await;

    let snapshot = store.snapshot();
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.products.to_vec(), mock_products());
    assert_eq!(api.request_count(), 1);
}

#[tokio::test]
async fn test_server_error_degrades_to_empty() {
    let api = MockApi::start(MockResponse::Status(500))
        .await
        .expect("start mock api");
    let source = HttpProductSource::new(&api.base_url()).expect("valid endpoint");

    let err = source.fetch_products().await.unwrap_err();
    assert!(matches!(err, Error::Status(500)));

    let store = ProductStore::new(Arc::new(source), ReadySignal::ready());
    store.load().await;

    assert!(!store.is_loading());
    assert!(store.snapshot().products.is_empty());
}

#[tokio::test]
async fn test_network_error_degrades_to_empty() {
    // Bind and immediately release a port so nothing is listening there
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr")
    };
    let source = HttpProductSource::new(&format!("http://{}", addr)).expect("valid endpoint");

    let err = source.fetch_products().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));

    let store = ProductStore::new(Arc::new(source), ReadySignal::ready());
    store.load().await;

    assert!(!store.is_loading());
    assert!(store.snapshot().products.is_empty());
}

#[tokio::test]
async fn test_no_request_before_ready() {
    let api = MockApi::start(MockResponse::Products(mock_products()))
        .await
        .expect("start mock api");
    let source = HttpProductSource::new(&api.base_url()).expect("valid endpoint");
    let (handle, signal) = ready_channel();
    let store = Arc::new(ProductStore::new(Arc::new(source), signal));

    let task = tokio::spawn({
        let store = store.clone();
        async move { store.load().await }
    });

    tokio::task::yield_now().await;
    assert_eq!(api.request_count(), 0);
    assert!(store.is_loading());

    handle.mark_ready();
    task.await.expect("load task");

    assert_eq!(api.request_count(), 1);
    assert_eq!(store.snapshot().products.len(), 4);
}
