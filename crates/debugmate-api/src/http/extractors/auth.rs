//! Bearer token authentication extractor.
//!
//! Extracts the token from the `Authorization: Bearer <token>` header and
//! resolves it to a user id through the identity verifier. Every failure
//! (missing header, bad encoding, rejected token, identity provider outage)
//! answers the same 401 so nothing about the account space leaks.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use debugmate_core::identity::IdentityVerifier;
use debugmate_types::identity::UserId;

use crate::http::error::AppError;
use crate::state::AppState;

/// Authenticated request marker carrying the verified user id.
pub struct AuthUser(pub UserId);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(parts)?;
        let user_id = state.identity.verify(&token).await?;
        Ok(AuthUser(user_id))
    }
}

/// Extract the bearer token from the Authorization header.
fn extract_bearer_token(parts: &Parts) -> Result<String, AppError> {
    let auth = parts
        .headers
        .get("authorization")
        .ok_or(AppError::Unauthorized)?;
    let auth_str = auth.to_str().map_err(|_| AppError::Unauthorized)?;
    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?
        .trim();
    if token.is_empty() {
        return Err(AppError::Unauthorized);
    }
    Ok(token.to_string())
}
