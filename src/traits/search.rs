//! Search trait for filtered collection endpoints.

use async_trait::async_trait;

use crate::client::PetfinderClient;
use crate::error::Result;
use crate::query::SearchParams;

/// Search a collection with query parameters.
///
/// Returns a single page as the API delivers it; following
/// `pagination._links.next` is left to the caller.
///
/// # Example
///
/// ```ignore
/// use petfinder::{Animal, PetfinderClient, Search, SearchParams};
///
/// let client = PetfinderClient::from_env().await?;
/// let params = SearchParams::new().with("type", "Dog").with("coat", "Medium");
/// let page = Animal::search(&client, &params).await?;
/// ```
#[async_trait]
pub trait Search: Sized {
    /// The page type returned by the endpoint.
    type Response;

    /// Search the collection.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails, or a decoding error
    /// if the body does not match the response shape.
    async fn search(client: &PetfinderClient, params: &SearchParams) -> Result<Self::Response>;
}
