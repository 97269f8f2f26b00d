//! Authentication error types.

use thiserror::Error;

/// Errors raised by the admin password gate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// A password was supplied and did not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No password was supplied and the gate requires one.
    #[error("password required")]
    PasswordRequired,
}
