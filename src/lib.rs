//! Petfinder API client library.
//!
//! A Rust library for the Petfinder v2 REST API. The client authenticates
//! with OAuth2 client credentials and decodes responses into typed records.
//! Each operation (Get, Search) is a trait implemented by the record types
//! whose endpoints support it.
//!
//! # Quick Start
//!
//! ```no_run
//! use petfinder::{Animal, Get, Organization, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> petfinder::Result<()> {
//!     // Shared client, configured from environment variables
//!     let client = petfinder::get_client().await?;
//!
//!     // All animal types
//!     let types = petfinder::get_all_types(&client).await?;
//!     println!("Found {} types", types.len());
//!
//!     // A single animal
//!     let animal = Animal::get(&client, "68670528").await?;
//!     println!("{:?} is a {:?}", animal.name, animal.species);
//!
//!     // Search
//!     let mut params = SearchParams::new();
//!     params.add_param("type", "Dog");
//!     params.add_param("coat", "Medium");
//!     let page = petfinder::get_animals(&client, &params).await?;
//!     println!("{:?} matches", page.total_count());
//!
//!     // An organization
//!     let org = Organization::get(&client, "KY422").await?;
//!     println!("{:?}", org.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`PetfinderClient`] owns the connection pool and the access token and
//!   performs authenticated GET requests.
//! - [`get_client`] hands out one shared client per process.
//! - [`Get`] fetches a single record; [`Search`] fetches one page of a
//!   filtered collection built from [`SearchParams`].
//! - `service` (feature `service`, on by default) exposes `/nearby` and
//!   `/findpet/{id}` over HTTP for browser clients.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `PF_CLIENT_ID` (required) - OAuth2 client id
//! - `PF_CLIENT_SECRET` (required) - OAuth2 client secret
//! - `PF_BASE_URL` (optional) - Base URL (defaults to `https://api.petfinder.com/v2`)

mod auth;
mod client;
pub mod config;
mod error;
mod models;
pub mod output;
mod pagination;
mod query;
mod shared;
mod traits;

#[cfg(feature = "service")]
pub mod service;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use auth::{fetch_access_token, AccessToken};
pub use client::PetfinderClient;
pub use config::Credentials;
pub use error::{ErrorKind, PetfinderError, Result};
pub use pagination::{Pagination, PaginationLinks};
pub use query::SearchParams;
pub use shared::get_client;

// Re-export traits
pub use traits::{Get, Search};

// Re-export models
pub use models::{
    // Shared records
    Address,
    Contact,
    Link,
    Photo,
    // Animal type records
    AnimalType,
    Breed,
    BreedLinks,
    TypeLinks,
    // Animal records
    Animal,
    AnimalBreeds,
    AnimalResponse,
    Attributes,
    Colors,
    Environment,
    // Organization records
    AdoptionPolicy,
    Hours,
    Organization,
    OrganizationLinks,
    OrganizationResponse,
    SocialMedia,
};

// Re-export convenience functions
pub use models::{get_all_types, get_breeds};
pub use models::{get_animal_by_id, get_animals};
pub use models::{get_organization_by_id, get_organizations};
