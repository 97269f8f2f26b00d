//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::Store;
use crate::services::{AdminCredential, OrderService};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the store and the admin password gate.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn Store>,
    credential: AdminCredential,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `store` - Row store (`PgStore` in production)
    /// * `credential` - Admin password gate for menu mutations
    #[must_use]
    pub fn new(store: Arc<dyn Store>, credential: AdminCredential) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, credential }),
        }
    }

    /// Get a reference to the row store.
    #[must_use]
    pub fn store(&self) -> &dyn Store {
        self.inner.store.as_ref()
    }

    /// Get a reference to the admin password gate.
    #[must_use]
    pub fn credential(&self) -> &AdminCredential {
        &self.inner.credential
    }

    /// Order service bound to this state's store.
    #[must_use]
    pub fn orders(&self) -> OrderService<'_> {
        OrderService::new(self.store())
    }
}
