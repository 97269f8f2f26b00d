//! Category mutations. All of them pass the admin password gate first.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use coffee_shop_core::{CategoryId, Envelope, NewCategory};

use crate::error::{AppError, Result};
use crate::middleware::{Gated, RequireAdmin, ValidPath};
use crate::state::AppState;

/// Create a category.
#[instrument(skip(state, category), fields(name = %category.name))]
pub async fn create(
    State(state): State<AppState>,
    Gated(category): Gated<NewCategory>,
) -> Result<(StatusCode, Json<Envelope>)> {
    let id = state.store().create_category(category).await?;
    tracing::info!(category_id = %id, "Category created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(format!("category {id} created"))),
    ))
}

/// Replace every field of a category.
#[instrument(skip(state, category))]
pub async fn update(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<CategoryId>,
    Gated(category): Gated<NewCategory>,
) -> Result<Json<Envelope>> {
    let matched = state.store().update_category(id, category).await?;
    if matched == 0 {
        return Err(AppError::NotFound(format!("category {id} not found")));
    }

    Ok(Json(Envelope::ok(format!("category {id} updated"))))
}

/// Delete a category.
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidPath(id): ValidPath<CategoryId>,
) -> Result<Json<Envelope>> {
    let matched = state.store().delete_category(id).await?;
    if matched == 0 {
        return Err(AppError::NotFound(format!("category {id} not found")));
    }

    tracing::info!(category_id = %id, "Category deleted");
    Ok(Json(Envelope::ok(format!("category {id} deleted"))))
}
