//! Get trait for fetching single records.

use async_trait::async_trait;

use crate::client::PetfinderClient;
use crate::error::Result;

/// Fetch a single record by identifier.
///
/// Implemented by record types that have a `/{collection}/{id}` endpoint.
///
/// # Example
///
/// ```ignore
/// use petfinder::{Animal, Get, PetfinderClient};
///
/// let client = PetfinderClient::from_env().await?;
/// let animal = Animal::get(&client, "68670528").await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The identifier type (animal id, organization id, type name).
    type Id: ?Sized + Sync;

    /// Fetch the record by identifier.
    ///
    /// # Arguments
    ///
    /// * `client` - The Petfinder API client
    /// * `id` - The record identifier
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails, or a decoding error
    /// if the expected key is missing from the response.
    async fn get(client: &PetfinderClient, id: &Self::Id) -> Result<Self>;
}
