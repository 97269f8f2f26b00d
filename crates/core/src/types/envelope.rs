//! The uniform response body returned by every mutation endpoint.
//!
//! ```json
//! {"success": true, "message": "category 4 created"}
//! ```
//!
//! Checkout responses may additionally carry `orderId` and, when some bundles
//! could not be stored, `failedBundles`. Both are omitted when absent.

use serde::{Deserialize, Serialize};

use crate::{OrderId, ProductId};

/// `{success, message}` plus the optional checkout fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_bundles: Vec<BundleFailure>,
}

/// A bundle insert that failed while its parent order was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleFailure {
    /// Position of the bundle in the submitted request.
    pub index: usize,
    pub product_id: ProductId,
    pub reason: String,
}

impl Envelope {
    /// A successful outcome.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            order_id: None,
            failed_bundles: Vec::new(),
        }
    }

    /// A failed outcome.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            order_id: None,
            failed_bundles: Vec::new(),
        }
    }

    /// Attach the id of the order this envelope reports on.
    #[must_use]
    pub const fn with_order(mut self, order_id: OrderId) -> Self {
        self.order_id = Some(order_id);
        self
    }

    /// Attach the bundles that could not be stored.
    #[must_use]
    pub fn with_failed_bundles(mut self, failed: Vec<BundleFailure>) -> Self {
        self.failed_bundles = failed;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_envelope_has_two_fields() {
        let json = serde_json::to_value(Envelope::ok("done")).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "done");
    }

    #[test]
    fn test_partial_order_envelope() {
        let envelope = Envelope::failure("order 9 placed; 1 of 2 bundles failed")
            .with_order(OrderId::new(9))
            .with_failed_bundles(vec![BundleFailure {
                index: 1,
                product_id: ProductId::new(77),
                reason: "unknown product".to_string(),
            }]);

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["orderId"], 9);
        assert_eq!(json["failedBundles"][0]["productId"], 77);
        assert_eq!(json["failedBundles"][0]["index"], 1);
    }
}
