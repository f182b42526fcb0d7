//! Identity types for the external auth provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque user identifier resolved by the identity provider.
///
/// Users are not persisted by this system beyond being a foreign key on
/// projects, so the id stays an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(s.to_string())
    }
}

/// Errors from identity verification.
///
/// The HTTP layer fails closed: every variant surfaces to the caller as the
/// same 401 response, the distinction exists for server-side logging only.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("token rejected by identity provider")]
    Unauthenticated,

    #[error("identity provider transport error: {0}")]
    Transport(String),

    #[error("malformed identity provider response: {0}")]
    MalformedResponse(String),
}
