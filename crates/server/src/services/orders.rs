//! Checkout: one order row, then one bundle row per requested line item.
//!
//! The order insert and the bundle inserts are separate statements with no
//! enclosing transaction. If the order insert fails nothing else is written.
//! Once the order exists, every bundle insert is attempted regardless of how
//! its siblings fare, and all of them are awaited before the outcome is
//! reported. At most [`MAX_CONCURRENT_BUNDLE_INSERTS`] run at once so a large
//! order cannot drain the connection pool. A bundle that fails leaves the order in place with fewer line
//! items than requested; the report says exactly which ones are missing.

use futures::{StreamExt, stream};
use tracing::instrument;

use coffee_shop_core::{BundleFailure, BundleId, BundleRequest, CustomerInfo, Envelope, OrderId};

use crate::db::{Store, StoreError};

/// Bundle inserts in flight per order. Kept below the pool size so other
/// requests still get connections while a large order is being stored.
pub const MAX_CONCURRENT_BUNDLE_INSERTS: usize = 4;

/// A bundle that was stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedBundle {
    /// Position of the bundle in the submitted request.
    pub index: usize,
    pub bundle_id: BundleId,
}

/// Outcome of a checkout whose order row was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReport {
    pub order_id: OrderId,
    pub placed: Vec<PlacedBundle>,
    pub failed: Vec<BundleFailure>,
}

impl OrderReport {
    const fn new(order_id: OrderId) -> Self {
        Self {
            order_id,
            placed: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// True when every requested bundle was stored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of bundles that were requested.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.placed.len() + self.failed.len()
    }

    /// Render the report as the response envelope.
    ///
    /// A partially stored order is reported as `success: false` with the
    /// order id and the failed bundles attached.
    #[must_use]
    pub fn into_envelope(self) -> Envelope {
        if self.is_complete() {
            Envelope::ok(format!(
                "order {} placed with {} bundles",
                self.order_id,
                self.placed.len()
            ))
            .with_order(self.order_id)
        } else {
            Envelope::failure(format!(
                "order {} placed; {} of {} bundles failed",
                self.order_id,
                self.failed.len(),
                self.requested()
            ))
            .with_order(self.order_id)
            .with_failed_bundles(self.failed)
        }
    }
}

/// Places orders against a [`Store`].
pub struct OrderService<'a> {
    store: &'a dyn Store,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Store an order and its bundles.
    ///
    /// # Errors
    ///
    /// Returns the `StoreError` from the order insert. Bundle failures are
    /// not errors; they are listed in [`OrderReport::failed`].
    #[instrument(skip(self, customer, bundles), fields(bundle_count = bundles.len()))]
    pub async fn place_order(
        &self,
        customer: &CustomerInfo,
        bundles: &[BundleRequest],
    ) -> Result<OrderReport, StoreError> {
        let order_id = self.store.create_order(customer).await.inspect_err(|e| {
            tracing::error!(error = %e, "Order insert failed, no bundles written");
        })?;

        // `buffered` yields in submission order, so outcomes line up with `bundles`.
        let inserts: Vec<_> = bundles
            .iter()
            .map(|bundle| self.store.create_bundle(order_id, bundle))
            .collect();
        let outcomes: Vec<_> = stream::iter(inserts)
            .buffered(MAX_CONCURRENT_BUNDLE_INSERTS)
            .collect()
            .await;

        let mut report = OrderReport::new(order_id);
        for (index, (request, outcome)) in bundles.iter().zip(outcomes).enumerate() {
            match outcome {
                Ok(bundle_id) => report.placed.push(PlacedBundle { index, bundle_id }),
                Err(e) => {
                    tracing::warn!(
                        order_id = %order_id,
                        product_id = %request.product_id,
                        index,
                        error = %e,
                        "Bundle insert failed"
                    );
                    report.failed.push(BundleFailure {
                        index,
                        product_id: request.product_id,
                        reason: failure_reason(&e),
                    });
                }
            }
        }

        if report.is_complete() {
            tracing::info!(order_id = %order_id, bundles = report.placed.len(), "Order placed");
        } else {
            tracing::warn!(
                order_id = %order_id,
                placed = report.placed.len(),
                failed = report.failed.len(),
                "Order placed with missing bundles"
            );
        }

        Ok(report)
    }
}

/// Client-safe description of a bundle failure.
fn failure_reason(err: &StoreError) -> String {
    match err {
        StoreError::Constraint(msg) => msg.clone(),
        StoreError::Database(_) | StoreError::Unavailable(_) => "could not be stored".to_string(),
    }
}
