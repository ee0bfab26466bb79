//! Error types for Petfinder API operations.

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur during Petfinder API operations.
///
/// The type is `Clone` so that a failed initialization of the shared client
/// can be handed to every caller that waited on it.
#[derive(Debug, Clone, Error)]
pub enum PetfinderError {
    /// Credentials are missing or empty.
    #[error("Petfinder configuration required: {0}")]
    ConfigMissing(String),

    /// The token endpoint refused the credentials or returned a malformed body.
    #[error("Failed to fetch access token: {message}")]
    Auth {
        message: String,
        status_code: Option<u16>,
    },

    /// An authenticated call was attempted without a token.
    #[error("Client has no access token; refresh the client to re-authenticate")]
    NotAuthenticated,

    /// A GET request returned a non-success status.
    #[error("{message}")]
    Transport { message: String, status_code: u16 },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[source] Arc<reqwest::Error>),

    /// The expected top-level key was absent from the response.
    #[error("Expected '{0}' key not found in the response")]
    MissingKey(&'static str),

    /// The response body was not valid JSON or did not match the expected shape.
    #[error("Failed to decode '{key}' response: {source}")]
    Decode {
        key: &'static str,
        #[source]
        source: Arc<serde_json::Error>,
    },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Coarse classification of a [`PetfinderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing credentials or an unusable base URL.
    Configuration,
    /// Token exchange failed or no token is held.
    Auth,
    /// The request could not be completed or returned a non-2xx status.
    Transport,
    /// The response could not be decoded into the expected record.
    Decoding,
}

impl PetfinderError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigMissing(_) | Self::UrlError(_) => ErrorKind::Configuration,
            Self::Auth { .. } | Self::NotAuthenticated => ErrorKind::Auth,
            Self::Transport { .. } | Self::HttpError(_) => ErrorKind::Transport,
            Self::MissingKey(_) | Self::Decode { .. } => ErrorKind::Decoding,
        }
    }

    /// HTTP status code attached to the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Auth { status_code, .. } => *status_code,
            Self::Transport { status_code, .. } => Some(*status_code),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn decode(key: &'static str, source: serde_json::Error) -> Self {
        Self::Decode {
            key,
            source: Arc::new(source),
        }
    }
}

impl From<reqwest::Error> for PetfinderError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(Arc::new(err))
    }
}

/// Result type alias for Petfinder operations.
pub type Result<T> = core::result::Result<T, PetfinderError>;
