//! Coffee shop server library.
//!
//! This crate provides the HTTP backend as a library, allowing the router
//! to be exercised in tests against an in-memory store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
