//! Admin password check used by the front-end's login box.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use coffee_shop_core::Envelope;

use crate::middleware::ValidPath;
use crate::state::AppState;

/// Report whether `pass` is the admin password.
///
/// The candidate is never logged; the request span records this path with
/// the candidate redacted.
pub async fn check_pass(
    State(state): State<AppState>,
    ValidPath(pass): ValidPath<String>,
) -> (StatusCode, Json<Envelope>) {
    if state.credential().check(&pass) {
        (StatusCode::OK, Json(Envelope::ok("password accepted")))
    } else {
        tracing::info!("Admin password check failed");
        (
            StatusCode::UNAUTHORIZED,
            Json(Envelope::failure("Invalid credentials")),
        )
    }
}
