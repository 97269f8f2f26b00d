//! HTTP middleware stack.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. CORS (only when an origin is configured)
//!
//! Password gating is not a layer: the [`Gated`] and [`RequireAdmin`]
//! extractors apply it per handler. [`ValidJson`] and [`ValidPath`] keep
//! extraction failures inside the response envelope.

pub mod auth;
pub mod cors;
pub mod extract;
pub mod request_id;
pub mod trace;

pub use auth::{ADMIN_PASSWORD_HEADER, Gated, RequireAdmin};
pub use cors::cors_layer;
pub use extract::{ValidJson, ValidPath};
pub use request_id::request_id_middleware;
pub use trace::{redact_path, request_span};
