//! Core types for the coffee shop.
//!
//! This module provides type-safe wrappers for the shop's domain concepts.

pub mod envelope;
pub mod id;
pub mod menu;
pub mod order;

pub use envelope::{BundleFailure, Envelope};
pub use id::*;
pub use menu::{Category, NewCategory, NewProduct, Product};
pub use order::{Bundle, BundleRequest, CustomerInfo, Order, OrderRequest};
