//! In-process [`Store`] used by tests.
//!
//! Mirrors the `PostgreSQL` schema closely enough for the HTTP surface and
//! the order flow to be exercised without a database: generated ids start at
//! 1 per table, listings are ordered by id, and the bundle foreign keys are
//! enforced. Failures can be injected per statement kind.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use coffee_shop_core::{
    Bundle, BundleId, BundleRequest, Category, CategoryId, CustomerInfo, NewCategory, NewProduct,
    Order, OrderId, Product, ProductId,
};

use super::{Store, StoreError};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    products: Vec<Product>,
    orders: Vec<Order>,
    bundles: Vec<Bundle>,
    next_category: i32,
    next_product: i32,
    next_order: i32,
    next_bundle: i32,
}

#[derive(Debug, Default, Clone, Copy)]
struct Faults {
    reads: bool,
    writes: bool,
    orders: bool,
}

/// Store that keeps every table in memory behind a single mutex.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    faults: Faults,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every read statement fails.
    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.faults.reads = true;
        self
    }

    /// Every write statement fails.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.faults.writes = true;
        self
    }

    /// Only order inserts fail.
    #[must_use]
    pub fn failing_orders(mut self) -> Self {
        self.faults.orders = true;
        self
    }

    /// Number of stored order rows.
    pub async fn order_count(&self) -> usize {
        self.tables.lock().await.orders.len()
    }

    /// Number of stored bundle rows across all orders.
    pub async fn bundle_count(&self) -> usize {
        self.tables.lock().await.bundles.len()
    }

    fn check_read(&self) -> Result<(), StoreError> {
        if self.faults.reads {
            return Err(StoreError::Unavailable("reads disabled".to_owned()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), StoreError> {
        if self.faults.writes {
            return Err(StoreError::Unavailable("writes disabled".to_owned()));
        }
        Ok(())
    }
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.check_read()?;
        Ok(self.tables.lock().await.categories.clone())
    }

    async fn create_category(&self, category: NewCategory) -> Result<CategoryId, StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().await;
        let id = CategoryId::new(next_id(&mut tables.next_category));
        tables.categories.push(category.into_row(id));
        Ok(id)
    }

    async fn update_category(
        &self,
        id: CategoryId,
        category: NewCategory,
    ) -> Result<u64, StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().await;
        match tables.categories.iter_mut().find(|c| c.id == id) {
            Some(row) => {
                *row = category.into_row(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_category(&self, id: CategoryId) -> Result<u64, StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().await;
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        Ok((before - tables.categories.len()) as u64)
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.check_read()?;
        Ok(self.tables.lock().await.products.clone())
    }

    async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        self.check_read()?;
        let tables = self.tables.lock().await;
        Ok(tables
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductId, StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().await;
        let id = ProductId::new(next_id(&mut tables.next_product));
        tables.products.push(product.into_row(id));
        Ok(id)
    }

    async fn update_product(&self, id: ProductId, product: NewProduct) -> Result<u64, StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().await;
        match tables.products.iter_mut().find(|p| p.id == id) {
            Some(row) => {
                *row = product.into_row(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_product(&self, id: ProductId) -> Result<u64, StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().await;
        if tables.bundles.iter().any(|b| b.product == id) {
            return Err(StoreError::Constraint(format!(
                "product {id} is still referenced by bundles"
            )));
        }
        let before = tables.products.len();
        tables.products.retain(|p| p.id != id);
        Ok((before - tables.products.len()) as u64)
    }

    async fn create_order(&self, customer: &CustomerInfo) -> Result<OrderId, StoreError> {
        self.check_write()?;
        if self.faults.orders {
            return Err(StoreError::Unavailable("order inserts disabled".to_owned()));
        }
        let mut tables = self.tables.lock().await;
        let id = OrderId::new(next_id(&mut tables.next_order));
        tables.orders.push(Order {
            id,
            fname: customer.fname.clone(),
            lname: customer.lname.clone(),
            phone: customer.phone.clone(),
            placed_at: Utc::now(),
        });
        Ok(id)
    }

    async fn create_bundle(
        &self,
        order_id: OrderId,
        bundle: &BundleRequest,
    ) -> Result<BundleId, StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().await;
        if !tables.orders.iter().any(|o| o.id == order_id) {
            return Err(StoreError::Constraint(format!(
                "order {order_id} does not exist"
            )));
        }
        if !tables.products.iter().any(|p| p.id == bundle.product_id) {
            return Err(StoreError::Constraint(format!(
                "product {} does not exist",
                bundle.product_id
            )));
        }
        let id = BundleId::new(next_id(&mut tables.next_bundle));
        tables.bundles.push(Bundle {
            id,
            product: bundle.product_id,
            quantity: bundle.quantity,
            order_id,
        });
        Ok(id)
    }

    async fn order(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        self.check_read()?;
        let tables = self.tables.lock().await;
        Ok(tables.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn bundles_for_order(&self, order_id: OrderId) -> Result<Vec<Bundle>, StoreError> {
        self.check_read()?;
        let tables = self.tables.lock().await;
        Ok(tables
            .bundles
            .iter()
            .filter(|b| b.order_id == order_id)
            .copied()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_read()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn latte() -> NewProduct {
        NewProduct {
            name: "Latte".to_string(),
            description: "Espresso with steamed milk".to_string(),
            size: "12".to_string(),
            category: "espresso".to_string(),
            price_cents: 450,
        }
    }

    #[tokio::test]
    async fn test_ids_are_generated_per_table() {
        let store = MemoryStore::new();
        let cat = store
            .create_category(NewCategory {
                name: "espresso".to_string(),
                units: "oz".to_string(),
            })
            .await
            .unwrap();
        let prod = store.create_product(latte()).await.unwrap();

        assert_eq!(cat.as_i32(), 1);
        assert_eq!(prod.as_i32(), 1);
    }

    #[tokio::test]
    async fn test_bundle_requires_existing_product() {
        let store = MemoryStore::new();
        let customer = CustomerInfo {
            fname: "A".to_string(),
            lname: "B".to_string(),
            phone: "1".to_string(),
        };
        let order = store.create_order(&customer).await.unwrap();
        let request = BundleRequest {
            product_id: ProductId::new(99),
            quantity: 1,
        };

        let err = store.create_bundle(order, &request).await.unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));
        assert_eq!(store.bundle_count().await, 0);
    }

    #[tokio::test]
    async fn test_update_reports_matched_rows() {
        let store = MemoryStore::new();
        let id = store.create_product(latte()).await.unwrap();

        assert_eq!(store.update_product(id, latte()).await.unwrap(), 1);
        assert_eq!(store.update_product(id, latte()).await.unwrap(), 1);
        assert_eq!(
            store.update_product(ProductId::new(42), latte()).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_failing_reads() {
        let store = MemoryStore::new().failing_reads();
        assert!(store.list_products().await.is_err());
        assert!(store.ping().await.is_err());
    }
}
