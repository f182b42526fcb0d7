//! IdentityVerifier trait definition.

use debugmate_types::identity::{IdentityError, UserId};

/// Trait for the external identity provider.
///
/// Resolves a bearer token to a user id or fails. Implementations must fail
/// closed: any rejection or transport failure is an error, never a guest
/// identity. The HTTP layer maps every failure to the same 401 response.
pub trait IdentityVerifier: Send + Sync {
    /// Resolve a bearer token to the authenticated user's id.
    fn verify(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<UserId, IdentityError>> + Send;
}
