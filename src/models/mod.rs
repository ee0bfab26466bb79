//! Petfinder API record types.

mod animal;
mod animal_type;
mod common;
mod organization;

pub use animal::*;
pub use animal_type::*;
pub use common::*;
pub use organization::*;

use serde::de::DeserializeOwned;

use crate::error::{PetfinderError, Result};

/// Decode a response body, naming `key` in the error on failure.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8], key: &'static str) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(key, error = %e, "Failed to decode response");
        PetfinderError::decode(key, e)
    })
}

/// Unwrap the value held under an envelope key.
pub(crate) fn require<T>(value: Option<T>, key: &'static str) -> Result<T> {
    value.ok_or_else(|| {
        tracing::warn!(key, "Expected key not found in the response");
        PetfinderError::MissingKey(key)
    })
}
