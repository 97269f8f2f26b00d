//! Admin password extractors for menu mutations.
//!
//! POST bodies may arrive bare or wrapped:
//!
//! ```json
//! {"name": "tea", "units": "ml"}
//! {"password": "...", "request": {"name": "tea", "units": "ml"}}
//! ```
//!
//! Requests without a body (DELETE) carry the password in the
//! `x-admin-password` header or the `password` query parameter. The header
//! is also honored for bare POST bodies.
//!
//! Both extractors run the gate before the handler body, so a bad password
//! never reaches the store.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{HeaderMap, request::Parts},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the admin password.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

#[derive(Deserialize)]
#[serde(untagged)]
enum GatedBody<T> {
    Wrapped {
        password: String,
        request: T,
    },
    Bare {
        #[serde(default)]
        password: Option<String>,
        #[serde(flatten)]
        request: T,
    },
}

/// JSON body that has passed the admin password gate.
///
/// # Example
///
/// ```rust,ignore
/// async fn create(
///     State(state): State<AppState>,
///     Gated(category): Gated<NewCategory>,
/// ) -> Result<impl IntoResponse> {
///     // password already checked
/// }
/// ```
pub struct Gated<T>(pub T);

impl<T> FromRequest<AppState> for Gated<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let header_password = password_from_headers(req.headers());

        let Json(body) = Json::<GatedBody<T>>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let (password, request) = match body {
            GatedBody::Wrapped { password, request } => (Some(password), request),
            GatedBody::Bare { password, request } => (password.or(header_password), request),
        };

        state.credential().authorize(password.as_deref())?;
        Ok(Self(request))
    }
}

#[derive(Debug, Deserialize)]
struct PasswordQuery {
    password: Option<String>,
}

/// Marker extractor for body-less mutations that passed the password gate.
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let password = match password_from_headers(&parts.headers) {
            Some(password) => Some(password),
            None => Query::<PasswordQuery>::try_from_uri(&parts.uri)
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?
                .0
                .password,
        };

        state.credential().authorize(password.as_deref())?;
        Ok(Self)
    }
}

fn password_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(String::from)
}
