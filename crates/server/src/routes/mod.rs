//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                    - Greeting
//! GET    /health              - Liveness
//! GET    /health/ready        - Readiness (store reachable)
//!
//! # Menu (public)
//! GET    /menu/{category}     - Products whose category equals {category}
//! GET    /products            - All products
//! GET    /categories          - All categories
//!
//! # Menu editing (admin password)
//! POST   /newCat              - Create category
//! POST   /updateCat/{id}      - Replace category
//! DELETE /deleteCat/{id}      - Delete category
//! POST   /newProd             - Create product
//! POST   /updateProd/{id}     - Replace product
//! DELETE /deleteProd/{id}     - Delete product
//! POST   /checkPass/{pass}    - Test a candidate admin password
//!
//! # Orders
//! POST   /newOrder            - Checkout (public)
//! GET    /orders/{id}         - Order with its bundles (admin password)
//! ```
//!
//! Every mutation answers with the `{success, message}` envelope.

pub mod auth;
pub mod categories;
pub mod health;
pub mod menu;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::hello))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(menu_routes())
        .merge(category_routes())
        .merge(product_routes())
        .merge(order_routes())
        .route("/checkPass/{pass}", post(auth::check_pass))
}

/// Public menu reads.
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/menu/{category}", get(menu::by_category))
        .route("/products", get(menu::products))
        .route("/categories", get(menu::categories))
}

/// Category mutations.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/newCat", post(categories::create))
        .route("/updateCat/{id}", post(categories::update))
        .route("/deleteCat/{id}", delete(categories::delete))
}

/// Product mutations.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/newProd", post(products::create))
        .route("/updateProd/{id}", post(products::update))
        .route("/deleteProd/{id}", delete(products::delete))
}

/// Checkout and order lookup.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/newOrder", post(orders::create))
        .route("/orders/{id}", get(orders::show))
}
