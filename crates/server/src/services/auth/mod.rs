//! The shared admin password that gates menu mutations.
//!
//! This is a single configured secret compared by value. There is no
//! hashing, no session, and no per-user identity; it keeps casual visitors
//! out of the menu editor and nothing more.

mod error;

pub use error::AuthError;

use constant_time_eq::constant_time_eq;
use secrecy::{ExposeSecret, SecretString};

/// The configured admin password plus the policy for requests that omit it.
#[derive(Clone)]
pub struct AdminCredential {
    secret: SecretString,
    require_password: bool,
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredential")
            .field("secret", &"[REDACTED]")
            .field("require_password", &self.require_password)
            .finish()
    }
}

impl AdminCredential {
    /// Create a credential gate.
    ///
    /// When `require_password` is false, mutations that carry no password at
    /// all are let through; a wrong password is always rejected.
    #[must_use]
    pub const fn new(secret: SecretString, require_password: bool) -> Self {
        Self {
            secret,
            require_password,
        }
    }

    /// Whether `candidate` is exactly the configured secret.
    ///
    /// Byte-for-byte, in constant time. No trimming or case folding.
    #[must_use]
    pub fn check(&self, candidate: &str) -> bool {
        constant_time_eq(
            self.secret.expose_secret().as_bytes(),
            candidate.as_bytes(),
        )
    }

    /// Apply the gate to an optional password taken from a request.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for a supplied password that
    /// does not match, and `AuthError::PasswordRequired` for a missing one
    /// when the gate requires it.
    pub fn authorize(&self, password: Option<&str>) -> Result<(), AuthError> {
        match password {
            Some(candidate) if self.check(candidate) => Ok(()),
            Some(_) => Err(AuthError::InvalidCredentials),
            None if self.require_password => Err(AuthError::PasswordRequired),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(require_password: bool) -> AdminCredential {
        AdminCredential::new(SecretString::from("Fl4tWh1te!"), require_password)
    }

    #[test]
    fn test_check_exact_match() {
        assert!(credential(false).check("Fl4tWh1te!"));
    }

    #[test]
    fn test_check_rejects_variants() {
        let cred = credential(false);
        assert!(!cred.check(""));
        assert!(!cred.check("fl4twh1te!"));
        assert!(!cred.check("FL4TWH1TE!"));
        assert!(!cred.check("Fl4tWh1te"));
        assert!(!cred.check("Fl4tWh1te! "));
        assert!(!cred.check(" Fl4tWh1te!"));
    }

    #[test]
    fn test_authorize_wrong_password_always_rejected() {
        assert_eq!(
            credential(false).authorize(Some("nope")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            credential(true).authorize(Some("nope")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_authorize_missing_password() {
        assert_eq!(credential(false).authorize(None), Ok(()));
        assert_eq!(
            credential(true).authorize(None),
            Err(AuthError::PasswordRequired)
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let output = format!("{:?}", credential(true));
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("Fl4tWh1te!"));
    }
}
