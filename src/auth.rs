//! OAuth2 client-credentials token exchange.

use std::fmt;

use reqwest::Client;
use serde::Deserialize;

use crate::config::Credentials;
use crate::error::{PetfinderError, Result};

const BEARER: &str = "Bearer";

/// A bearer token issued by the Petfinder token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    token_type: String,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token_type", &self.token_type)
            .finish_non_exhaustive()
    }
}

impl AccessToken {
    /// Create a bearer token from its raw value.
    pub fn bearer(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            token_type: BEARER.to_string(),
        }
    }

    /// The raw token value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The token type, normally `Bearer`.
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.token_type, self.value)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Exchange client credentials for an access token.
///
/// Sends a form-encoded `POST {base_url}/oauth2/token` with
/// `grant_type=client_credentials`.
///
/// # Errors
///
/// Returns [`PetfinderError::Auth`] for every failure of the exchange,
/// including an unreachable token endpoint, a non-success status, a body
/// that is not JSON, and a missing `access_token`.
pub async fn fetch_access_token(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken> {
    let url = format!("{base_url}/oauth2/token");
    tracing::debug!(%url, client_id = %credentials.client_id, "Requesting access token");

    let form = [
        ("grant_type", "client_credentials"),
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
    ];

    let response = http
        .post(&url)
        .form(&form)
        .send()
        .await
        .map_err(|e| unreachable_token_endpoint("token request failed", e))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| unreachable_token_endpoint("reading token response failed", e))?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Token request rejected");
        return Err(PetfinderError::Auth {
            message: format!("status {status}, body: {body}"),
            status_code: Some(status.as_u16()),
        });
    }

    let parsed: TokenResponse = serde_json::from_str(&body).map_err(|e| PetfinderError::Auth {
        message: format!("malformed token response: {e}"),
        status_code: Some(status.as_u16()),
    })?;

    let value = parsed.access_token.ok_or_else(|| PetfinderError::Auth {
        message: "response did not contain an access_token".to_string(),
        status_code: Some(status.as_u16()),
    })?;

    tracing::info!(expires_in = ?parsed.expires_in, "Fetched access token");

    Ok(AccessToken {
        value,
        token_type: parsed.token_type.unwrap_or_else(|| BEARER.to_string()),
    })
}

fn unreachable_token_endpoint(context: &str, err: reqwest::Error) -> PetfinderError {
    tracing::warn!(error = %err, "{context}");
    PetfinderError::Auth {
        message: format!("{context}: {err}"),
        status_code: None,
    }
}
