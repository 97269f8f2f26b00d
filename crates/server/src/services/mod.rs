//! Business logic services.
//!
//! # Services
//!
//! - `auth` - The shared admin password gate
//! - `orders` - Checkout: an order row followed by its bundle rows

pub mod auth;
pub mod orders;

pub use auth::{AdminCredential, AuthError};
pub use orders::{OrderReport, OrderService};
