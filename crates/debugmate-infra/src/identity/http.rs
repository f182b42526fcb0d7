//! HTTP identity verifier against a GoTrue-style auth endpoint.
//!
//! Resolves a bearer token by calling `{base_url}/auth/v1/user` with the
//! token in the `Authorization` header and the service key in the `apikey`
//! header, then reading the `id` field of the returned user object.
//!
//! Fails closed: a non-2xx status is `Unauthenticated`, transport and parse
//! failures get their own variants for logging, and the HTTP layer maps all
//! of them to the same 401 response.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use debugmate_core::identity::IdentityVerifier;
use debugmate_types::identity::{IdentityError, UserId};

/// Identity verifier backed by an external auth provider over HTTP.
///
/// Does NOT derive Debug to prevent accidental exposure of the service key.
pub struct HttpIdentityVerifier {
    client: reqwest::Client,
    base_url: String,
    service_key: SecretString,
}

/// The subset of the provider's user object we care about.
#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
}

impl HttpIdentityVerifier {
    /// Create a new verifier for the given provider base URL and service key.
    pub fn new(base_url: impl Into<String>, service_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            service_key,
        }
    }

    fn user_endpoint(&self) -> String {
        format!("{}/auth/v1/user", self.base_url.trim_end_matches('/'))
    }
}

impl IdentityVerifier for HttpIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<UserId, IdentityError> {
        let response = self
            .client
            .get(self.user_endpoint())
            .bearer_auth(token)
            .header("apikey", self.service_key.expose_secret())
            .send()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IdentityError::Unauthenticated);
        }

        let body = response
            .text()
            .await
            .map_err(|e| IdentityError::Transport(e.to_string()))?;

        parse_user_id(&body)
    }
}

/// Parse the provider's user object into a `UserId`.
fn parse_user_id(body: &str) -> Result<UserId, IdentityError> {
    let user: UserResponse = serde_json::from_str(body)
        .map_err(|e| IdentityError::MalformedResponse(e.to_string()))?;
    if user.id.is_empty() {
        return Err(IdentityError::MalformedResponse("empty user id".to_string()));
    }
    Ok(UserId(user.id))
}
