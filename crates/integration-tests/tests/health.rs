//! Liveness and readiness.

use axum::http::StatusCode;

use coffee_shop_integration_tests::TestApp;
use coffee_shop_server::db::MemoryStore;

#[tokio::test]
async fn test_root_and_liveness() {
    let app = TestApp::new();

    assert_eq!(app.get("/").await.0, StatusCode::OK);
    assert_eq!(app.get("/health").await.0, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_follows_store() {
    let ready = TestApp::new();
    assert_eq!(ready.get("/health/ready").await.0, StatusCode::OK);

    let down = TestApp::with_store(MemoryStore::new().failing_reads(), false);
    assert_eq!(
        down.get("/health/ready").await.0,
        StatusCode::SERVICE_UNAVAILABLE
    );
}
