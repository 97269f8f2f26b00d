//! Public menu reads.
//!
//! A store failure is reported as a 500 envelope, never as an empty list.

use axum::{Json, extract::State};
use tracing::instrument;

use coffee_shop_core::{Category, Product};

use crate::error::Result;
use crate::middleware::ValidPath;
use crate::state::AppState;

/// Products whose category is exactly `category`.
///
/// Literal equality: no case folding, no substring match.
#[instrument(skip(state))]
pub async fn by_category(
    State(state): State<AppState>,
    ValidPath(category): ValidPath<String>,
) -> Result<Json<Vec<Product>>> {
    let products = state.store().products_by_category(&category).await?;
    Ok(Json(products))
}

/// Every product.
#[instrument(skip(state))]
pub async fn products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.store().list_products().await?;
    Ok(Json(products))
}

/// Every category.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = state.store().list_categories().await?;
    Ok(Json(categories))
}
