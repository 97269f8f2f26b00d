//! Checkout and order lookup.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::Serialize;
use tracing::instrument;

use coffee_shop_core::{Bundle, Envelope, Order, OrderId, OrderRequest};

use crate::error::{AppError, Result};
use crate::middleware::{RequireAdmin, ValidJson, ValidPath};
use crate::state::AppState;

/// Place an order and its bundles.
///
/// - 201 when the order and every bundle were stored
/// - 207 when the order was stored but some bundles were not; the envelope
///   lists them under `failedBundles`
/// - 500 when the order itself could not be stored (nothing was written)
#[instrument(skip(state, request), fields(bundles = request.bundles.len()))]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<OrderRequest>,
) -> Result<(StatusCode, Json<Envelope>)> {
    let report = state
        .orders()
        .place_order(&request.info, &request.bundles)
        .await?;

    let status = if report.is_complete() {
        StatusCode::CREATED
    } else {
        StatusCode::MULTI_STATUS
    };

    Ok((status, Json(report.into_envelope())))
}

/// An order together with its stored bundles.
#[derive(Debug, Serialize)]
pub struct OrderDetail {
    pub order: Order,
    pub bundles: Vec<Bundle>,
}

/// Look up an order and the bundles that were actually stored for it.
#[instrument(skip(state, _admin))]
pub async fn show(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidPath(id): ValidPath<OrderId>,
) -> Result<Json<OrderDetail>> {
    let order = state
        .store()
        .order(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id} not found")))?;
    let bundles = state.store().bundles_for_order(id).await?;

    Ok(Json(OrderDetail { order, bundles }))
}
