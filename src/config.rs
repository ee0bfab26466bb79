//! Environment configuration.
//!
//! Credentials come from `PF_CLIENT_ID` / `PF_CLIENT_SECRET`. The base URL is
//! taken from `PF_BASE_URL` when set, otherwise [`DEFAULT_BASE_URL`].

use std::env;
use std::fmt;

use crate::error::{PetfinderError, Result};

/// Default base URL for the Petfinder v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.petfinder.com/v2";

/// Environment variable holding the OAuth2 client id.
pub const CLIENT_ID_VAR: &str = "PF_CLIENT_ID";

/// Environment variable holding the OAuth2 client secret.
pub const CLIENT_SECRET_VAR: &str = "PF_CLIENT_SECRET";

/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "PF_BASE_URL";

/// Environment variable holding the listen address of the HTTP service.
pub const SERVICE_ADDR_VAR: &str = "PF_SERVICE_ADDR";

/// Listen address of the HTTP service when `PF_SERVICE_ADDR` is unset.
pub const DEFAULT_SERVICE_ADDR: &str = "0.0.0.0:8081";

/// OAuth2 client credentials issued by Petfinder.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read credentials from `PF_CLIENT_ID` and `PF_CLIENT_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`PetfinderError::ConfigMissing`] if either variable is unset
    /// or empty.
    pub fn from_env() -> Result<Self> {
        match (non_empty_var(CLIENT_ID_VAR), non_empty_var(CLIENT_SECRET_VAR)) {
            (Some(client_id), Some(client_secret)) => Ok(Self {
                client_id,
                client_secret,
            }),
            _ => {
                tracing::error!(
                    "{} and/or {} are missing from the environment",
                    CLIENT_ID_VAR,
                    CLIENT_SECRET_VAR
                );
                Err(PetfinderError::ConfigMissing(format!(
                    "{CLIENT_ID_VAR} and {CLIENT_SECRET_VAR} environment variables must be set"
                )))
            }
        }
    }
}

/// Where a client reads its credentials from on (re-)authentication.
#[derive(Debug, Clone)]
pub(crate) enum CredentialSource {
    /// Re-read the environment every time.
    Environment,
    /// Fixed credentials supplied at construction.
    Static(Credentials),
}

impl CredentialSource {
    pub(crate) fn load(&self) -> Result<Credentials> {
        match self {
            Self::Environment => Credentials::from_env(),
            Self::Static(credentials) => Ok(credentials.clone()),
        }
    }
}

/// Resolve the API base URL from the environment.
///
/// Called once per request so that changes to `PF_BASE_URL` are picked up.
pub fn base_url() -> String {
    normalize_base_url(non_empty_var(BASE_URL_VAR).as_deref().unwrap_or(DEFAULT_BASE_URL))
}

/// Resolve the HTTP service listen address from the environment.
pub fn service_addr() -> String {
    non_empty_var(SERVICE_ADDR_VAR).unwrap_or_else(|| DEFAULT_SERVICE_ADDR.to_string())
}

/// Strip trailing slashes; paths are appended with a leading `/`.
pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
