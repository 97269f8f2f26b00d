//! Product mutations. All of them pass the admin password gate first.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use coffee_shop_core::{Envelope, NewProduct, ProductId};

use crate::error::{AppError, Result};
use crate::middleware::{Gated, RequireAdmin, ValidPath};
use crate::state::AppState;

/// Create a product.
#[instrument(skip(state, product), fields(name = %product.name, category = %product.category))]
pub async fn create(
    State(state): State<AppState>,
    Gated(product): Gated<NewProduct>,
) -> Result<(StatusCode, Json<Envelope>)> {
    let id = state.store().create_product(product).await?;
    tracing::info!(product_id = %id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(format!("product {id} created"))),
    ))
}

/// Replace every field of a product.
#[instrument(skip(state, product))]
pub async fn update(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<ProductId>,
    Gated(product): Gated<NewProduct>,
) -> Result<Json<Envelope>> {
    let matched = state.store().update_product(id, product).await?;
    if matched == 0 {
        return Err(AppError::NotFound(format!("product {id} not found")));
    }

    Ok(Json(Envelope::ok(format!("product {id} updated"))))
}

/// Delete a product.
///
/// Fails with 409 while any bundle still references the product.
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidPath(id): ValidPath<ProductId>,
) -> Result<Json<Envelope>> {
    let matched = state.store().delete_product(id).await?;
    if matched == 0 {
        return Err(AppError::NotFound(format!("product {id} not found")));
    }

    tracing::info!(product_id = %id, "Product deleted");
    Ok(Json(Envelope::ok(format!("product {id} deleted"))))
}
