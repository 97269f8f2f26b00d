//! `PostgreSQL` implementation of [`Store`].
//!
//! Queries are built with the runtime `sqlx::query*` functions and bound
//! positionally; user input never reaches the statement text.

use async_trait::async_trait;
use sqlx::PgPool;

use coffee_shop_core::{
    Bundle, BundleId, BundleRequest, Category, CategoryId, CustomerInfo, NewCategory, NewProduct,
    Order, OrderId, Product, ProductId,
};

use super::{Store, StoreError};

/// Store backed by a pooled `PostgreSQL` connection.
///
/// Each statement acquires a connection for its own duration; sqlx hands it
/// back to the pool on every exit path.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query_as::<_, Category>(
            r"
            SELECT id, name, sizeunits
            FROM category
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create_category(&self, category: NewCategory) -> Result<CategoryId, StoreError> {
        let id = sqlx::query_scalar::<_, CategoryId>(
            r"
            INSERT INTO category (name, sizeunits)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(&category.name)
        .bind(&category.units)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_category(
        &self,
        id: CategoryId,
        category: NewCategory,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r"
            UPDATE category
            SET name = $1, sizeunits = $2
            WHERE id = $3
            ",
        )
        .bind(&category.name)
        .bind(&category.units)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_category(&self, id: CategoryId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, size, category, price_cents
            FROM product
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, description, size, category, price_cents
            FROM product
            WHERE category = $1
            ORDER BY id
            ",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductId, StoreError> {
        let id = sqlx::query_scalar::<_, ProductId>(
            r"
            INSERT INTO product (name, description, size, category, price_cents)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.size)
        .bind(&product.category)
        .bind(product.price_cents)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_product(&self, id: ProductId, product: NewProduct) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r"
            UPDATE product
            SET name = $1, description = $2, size = $3, category = $4, price_cents = $5
            WHERE id = $6
            ",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.size)
        .bind(&product.category)
        .bind(product.price_cents)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_product(&self, id: ProductId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn create_order(&self, customer: &CustomerInfo) -> Result<OrderId, StoreError> {
        let id = sqlx::query_scalar::<_, OrderId>(
            r"
            INSERT INTO orders (fname, lname, phone)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(&customer.fname)
        .bind(&customer.lname)
        .bind(&customer.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn create_bundle(
        &self,
        order_id: OrderId,
        bundle: &BundleRequest,
    ) -> Result<BundleId, StoreError> {
        let id = sqlx::query_scalar::<_, BundleId>(
            r"
            INSERT INTO bundles (product, quantity, order_id)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(bundle.product_id)
        .bind(bundle.quantity)
        .bind(order_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn order(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let row = sqlx::query_as::<_, Order>(
            r"
            SELECT id, fname, lname, phone, placed_at
            FROM orders
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn bundles_for_order(&self, order_id: OrderId) -> Result<Vec<Bundle>, StoreError> {
        let rows = sqlx::query_as::<_, Bundle>(
            r"
            SELECT id, product, quantity, order_id
            FROM bundles
            WHERE order_id = $1
            ORDER BY id
            ",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
