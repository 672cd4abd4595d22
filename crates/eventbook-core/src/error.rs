// Error taxonomy shared across the workspace
//
// Transport mapping lives in the API crate; this enum only classifies
// failures so that one dispatch table can translate them.

use std::collections::BTreeMap;
use thiserror::Error;

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure classes for the event-booking backend
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing request fields, keyed by field name
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),

    /// Bad credentials. The message is intentionally generic: it must not
    /// reveal whether the email exists.
    #[error("{0}")]
    Authentication(String),

    /// Authenticated but lacking the required role
    #[error("insufficient permissions")]
    Authorization,

    /// Resource absent (or not visible to the caller)
    #[error("resource not found")]
    NotFound,

    /// Anything else. Detail is logged server-side, never sent to clients.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl Error {
    /// Validation error for a single field
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), message.into());
        Error::Validation(errors)
    }

    /// The one credential-failure message for every login failure path
    pub fn bad_credentials() -> Self {
        Error::Authentication("Invalid email or password".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_keyed_by_name() {
        let err = Error::field("email", "Email is already in use");
        match err {
            Error::Validation(map) => {
                assert_eq!(map.get("email").map(String::as_str), Some("Email is already in use"));
                assert_eq!(map.len(), 1);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_credentials_message_is_generic() {
        // Unknown email and wrong password must be indistinguishable
        assert_eq!(Error::bad_credentials().to_string(), "Invalid email or password");
    }
}
