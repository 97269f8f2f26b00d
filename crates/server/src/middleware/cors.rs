//! CORS for the browser front-end.
//!
//! The menu front-end is served from a different origin than the API, so
//! the one configured origin is allowed to call it with credentials.

use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

use super::auth::ADMIN_PASSWORD_HEADER;

/// Build the CORS layer for `origin`.
///
/// Returns `None` when the origin is not a valid header value.
#[must_use]
pub fn cors_layer(origin: &str) -> Option<CorsLayer> {
    let origin = HeaderValue::from_str(origin).ok()?;

    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([
                header::CONTENT_TYPE,
                HeaderName::from_static("x-requested-with"),
                HeaderName::from_static(ADMIN_PASSWORD_HEADER),
            ])
            .allow_credentials(true),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    use super::*;

    #[test]
    fn test_invalid_origin_is_rejected() {
        assert!(cors_layer("http://bad\norigin").is_none());
    }

    #[tokio::test]
    async fn test_allowed_origin_is_echoed() {
        let app = Router::new()
            .route("/products", get(|| async { "[]" }))
            .layer(cors_layer("http://localhost:8000").unwrap());

        let request = Request::builder()
            .uri("/products")
            .header(header::ORIGIN, "http://localhost:8000")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:8000"
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }
}
