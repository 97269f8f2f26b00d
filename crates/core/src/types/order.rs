//! Customer orders and the bundles (line items) they own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{BundleId, OrderId, ProductId};

/// Who placed an order. All fields are free-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub fname: String,
    pub lname: String,
    pub phone: String,
}

/// One requested line item: a product and how many of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleRequest {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Body of a checkout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub info: CustomerInfo,
    #[serde(default)]
    pub bundles: Vec<BundleRequest>,
}

/// A stored order row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Order {
    pub id: OrderId,
    pub fname: String,
    pub lname: String,
    pub phone: String,
    pub placed_at: DateTime<Utc>,
}

/// A stored bundle row. Only meaningful alongside its parent order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Bundle {
    pub id: BundleId,
    pub product: ProductId,
    pub quantity: i32,
    #[serde(rename = "orderId")]
    pub order_id: OrderId,
}
