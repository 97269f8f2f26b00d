//! Coffee Shop Core - Shared types library.
//!
//! This crate provides common types used across all coffee shop components:
//! - `server` - The HTTP backend serving the menu and taking orders
//! - `cli` - Command-line tools for migrations and seeding the menu
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, menu rows, order types, and the response envelope

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
