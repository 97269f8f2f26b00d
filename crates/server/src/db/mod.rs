//! Data access for the coffee shop `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `category` - Menu categories and the unit their sizes are measured in
//! - `product` - Menu items, filtered by the literal `category` text
//! - `orders` - One row per checkout
//! - `bundles` - Line items; `order_id` and `product` are foreign keys
//!
//! Every statement binds its parameters positionally. There are no explicit
//! transactions: each call is its own durable write.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p coffee-shop-cli -- migrate
//! ```

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use coffee_shop_core::{
    Bundle, BundleId, BundleRequest, Category, CategoryId, CustomerInfo, NewCategory, NewProduct,
    Order, OrderId, Product, ProductId,
};

#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors surfaced by the underlying store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Foreign-key or unique constraint violation.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// The store refused the statement without reaching a database.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Every sqlx error, whether it arrives through `?` or `map_err`, is
/// classified here: constraint violations split out of the generic database
/// bucket.
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && (db_err.is_foreign_key_violation() || db_err.is_unique_violation())
        {
            return Self::Constraint(db_err.message().to_owned());
        }
        Self::Database(err)
    }
}

/// Row-level access to the shop tables.
///
/// Reads return rows (possibly none); writes return the generated id for
/// inserts or the number of matched rows for updates and deletes.
#[async_trait]
pub trait Store: Send + Sync {
    /// All categories, ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Insert a category and return its generated id.
    async fn create_category(&self, category: NewCategory) -> Result<CategoryId, StoreError>;

    /// Replace every field of a category. Returns the matched row count.
    async fn update_category(&self, id: CategoryId, category: NewCategory)
    -> Result<u64, StoreError>;

    /// Delete a category. Returns the matched row count.
    async fn delete_category(&self, id: CategoryId) -> Result<u64, StoreError>;

    /// All products, ordered by id.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Products whose `category` equals `category` exactly.
    async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError>;

    /// Insert a product and return its generated id.
    async fn create_product(&self, product: NewProduct) -> Result<ProductId, StoreError>;

    /// Replace every field of a product. Returns the matched row count.
    async fn update_product(&self, id: ProductId, product: NewProduct) -> Result<u64, StoreError>;

    /// Delete a product. Returns the matched row count.
    async fn delete_product(&self, id: ProductId) -> Result<u64, StoreError>;

    /// Insert an order row and return its generated id.
    async fn create_order(&self, customer: &CustomerInfo) -> Result<OrderId, StoreError>;

    /// Insert one bundle belonging to `order_id`.
    async fn create_bundle(
        &self,
        order_id: OrderId,
        bundle: &BundleRequest,
    ) -> Result<BundleId, StoreError>;

    /// Look up a single order.
    async fn order(&self, id: OrderId) -> Result<Option<Order>, StoreError>;

    /// Bundles owned by an order, ordered by id.
    async fn bundles_for_order(&self, order_id: OrderId) -> Result<Vec<Bundle>, StoreError>;

    /// Cheap connectivity check used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
