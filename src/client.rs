//! Petfinder API client.
//!
//! Owns the HTTP connection pool and the current access token. Higher-level
//! operations are implemented via traits on the model types.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use tokio::sync::RwLock;
use url::Url;

use crate::auth::{self, AccessToken};
use crate::config::{self, CredentialSource, Credentials};
use crate::error::{PetfinderError, Result};

const USER_AGENT: &str = concat!("petfinder-rs/", env!("CARGO_PKG_VERSION"));

/// Low-level Petfinder API client.
///
/// Handles authentication and HTTP GET requests. Endpoint-specific
/// operations are implemented via the `Get` and `Search` traits on model
/// types.
///
/// Initial authentication and [`refresh`](Self::refresh) hold the same write
/// lock on the token. Requests copy the `Authorization` header value under a
/// read lock and release it before sending, so a request that is already in
/// flight keeps the token it started with.
///
/// Share one instance behind an `Arc`; [`crate::get_client`] does this for
/// the process-wide instance.
///
/// # Example
///
/// ```no_run
/// use petfinder::PetfinderClient;
///
/// # async fn example() -> petfinder::Result<()> {
/// // Credentials and base URL from the environment
/// let client = PetfinderClient::from_env().await?;
///
/// // Or configure manually
/// let client =
///     PetfinderClient::new("client-id", "client-secret", "https://api.petfinder.com/v2").await?;
/// # Ok(())
/// # }
/// ```
pub struct PetfinderClient {
    http: Client,
    credentials: CredentialSource,
    /// Fixed base URL; `None` resolves `PF_BASE_URL` per request.
    base_url: Option<String>,
    token: RwLock<Option<AccessToken>>,
}

impl std::fmt::Debug for PetfinderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetfinderClient")
            .field("base_url", &self.base_url())
            .finish_non_exhaustive()
    }
}

impl PetfinderClient {
    /// Create and authenticate a client from environment variables.
    ///
    /// Reads `PF_CLIENT_ID` and `PF_CLIENT_SECRET`, and resolves
    /// `PF_BASE_URL` on every request. [`refresh`](Self::refresh) re-reads
    /// the credentials.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a credential variable is missing or
    /// empty, or an auth error if the token exchange fails.
    pub async fn from_env() -> Result<Self> {
        tracing::info!("Creating Petfinder client from environment");
        let client = Self::build(CredentialSource::Environment, None)?;
        client.authenticate().await?;
        tracing::info!("Created Petfinder client");
        Ok(client)
    }

    /// Create and authenticate a client with explicit credentials.
    ///
    /// # Arguments
    ///
    /// * `client_id` - OAuth2 client id issued by Petfinder
    /// * `client_secret` - OAuth2 client secret
    /// * `base_url` - Base URL for the API (e.g., `https://api.petfinder.com/v2`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the token exchange fails.
    pub async fn new(client_id: &str, client_secret: &str, base_url: &str) -> Result<Self> {
        let base_url = config::normalize_base_url(base_url);
        Url::parse(&base_url)?;

        let credentials = CredentialSource::Static(Credentials::new(client_id, client_secret));
        let client = Self::build(credentials, Some(base_url))?;
        client.authenticate().await?;
        tracing::info!(base_url = %client.base_url(), "Created Petfinder client");
        Ok(client)
    }

    fn build(credentials: CredentialSource, base_url: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()?;

        Ok(Self {
            http,
            credentials,
            base_url,
            token: RwLock::new(None),
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => config::base_url(),
        }
    }

    /// The access token currently held, if any.
    pub async fn access_token(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }

    /// Discard the current token and authenticate again.
    ///
    /// Environment-backed clients re-read `PF_CLIENT_ID` and
    /// `PF_CLIENT_SECRET`. Requests issued while the refresh runs wait for
    /// it to finish.
    ///
    /// # Errors
    ///
    /// Returns the configuration or auth error of the new exchange. The
    /// client is then left without a token and authenticated calls fail with
    /// [`PetfinderError::NotAuthenticated`] until a refresh succeeds.
    pub async fn refresh(&self) -> Result<()> {
        tracing::info!("Refreshing client");
        self.authenticate().await
    }

    async fn authenticate(&self) -> Result<()> {
        let mut token = self.token.write().await;
        *token = None;

        let credentials = self.credentials.load()?;
        match auth::fetch_access_token(&self.http, &self.base_url(), &credentials).await {
            Ok(fresh) => {
                *token = Some(fresh);
                tracing::debug!("Authorization header set");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching access token");
                Err(e)
            }
        }
    }

    /// Make an authenticated GET request to an absolute URL.
    ///
    /// Returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`PetfinderError::Transport`] for a non-2xx status, with the
    /// body appended when the server sent JSON or plain text.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let authorization = self
            .token
            .read()
            .await
            .as_ref()
            .map(AccessToken::header_value)
            .ok_or(PetfinderError::NotAuthenticated)?;

        tracing::debug!("Sending GET request");
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        tracing::debug!(status = response.status().as_u16(), "GET request successful");

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    /// Make an authenticated GET request to `{base_url}{path}`.
    ///
    /// `path` starts with `/` and may carry a query string.
    pub async fn send_get_request(&self, path: &str) -> Result<Vec<u8>> {
        let url = Url::parse(&format!("{}{}", self.base_url(), path))?;
        self.get(url.as_str()).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let mut message = format!(
            "Request failed with status code {} ({})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        );

        if has_diagnostic_body(&response) {
            if let Ok(body) = response.text().await {
                message.push('\n');
                message.push_str(&body);
            }
        }

        tracing::warn!(status = status.as_u16(), "Error in GET request: {message}");
        Err(PetfinderError::Transport {
            message,
            status_code: status.as_u16(),
        })
    }
}

/// Whether the error body is worth reading into the error message.
fn has_diagnostic_body(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|media| {
            let media = media.trim();
            media.eq_ignore_ascii_case("application/json")
                || media.eq_ignore_ascii_case("text/plain")
        })
        .unwrap_or(false)
}
