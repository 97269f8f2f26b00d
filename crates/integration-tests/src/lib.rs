//! Integration tests for the coffee shop backend.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p coffee-shop-integration-tests
//! ```
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot` against
//! a [`MemoryStore`], so no database or listening socket is needed.
//!
//! # Test Categories
//!
//! - `menu` - Category and product CRUD plus the menu reads
//! - `orders` - Checkout, including partial and failed orders
//! - `auth` - The admin password gate

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use coffee_shop_server::db::{MemoryStore, Store};
use coffee_shop_server::routes;
use coffee_shop_server::services::AdminCredential;
use coffee_shop_server::state::AppState;

/// Admin password every [`TestApp`] is configured with.
pub const ADMIN_PASSWORD: &str = "Fl4tWh1te!";

/// A router wired to an in-memory store the test can inspect.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    router: Router,
}

impl TestApp {
    /// App over an empty store; missing passwords are accepted.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new(), false)
    }

    /// App that rejects mutations carrying no password.
    #[must_use]
    pub fn strict() -> Self {
        Self::with_store(MemoryStore::new(), true)
    }

    /// App over a preconfigured store.
    #[must_use]
    pub fn with_store(store: MemoryStore, require_password: bool) -> Self {
        let store = Arc::new(store);
        let shared: Arc<dyn Store> = store.clone();
        let credential =
            AdminCredential::new(SecretString::from(ADMIN_PASSWORD), require_password);
        let router = routes::routes().with_state(AppState::new(shared, credential));

        Self { store, router }
    }

    /// Send a request and return the status and the JSON body
    /// (`Value::Null` when the body is not JSON).
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    /// `GET uri`.
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, &[]).await
    }

    /// `POST uri` with a JSON body.
    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body), &[]).await
    }

    /// `DELETE uri`.
    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None, &[]).await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
