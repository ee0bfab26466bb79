//! Animal type and breed records.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{decode, require, Link};
use crate::client::PetfinderClient;
use crate::error::Result;
use crate::traits::Get;

/// An animal type such as "Dog" or "Cat", with the coat, gender and color
/// values valid for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalType {
    pub name: Option<String>,
    pub coats: Option<Vec<String>>,
    pub genders: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    #[serde(rename = "_links")]
    pub links: Option<TypeLinks>,
}

/// Links attached to an animal type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeLinks {
    #[serde(rename = "self")]
    pub self_link: Option<Link>,
    pub breeds: Option<Link>,
}

/// A breed of an animal type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub name: Option<String>,
    #[serde(rename = "_links")]
    pub links: Option<BreedLinks>,
}

/// Links attached to a breed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedLinks {
    #[serde(rename = "type")]
    pub animal_type: Option<Link>,
}

impl AnimalType {
    /// Href of this type's own resource.
    pub fn self_href(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|l| l.self_link.as_ref())
            .and_then(|l| l.href.as_deref())
    }

    /// Fetch the breeds of this type.
    ///
    /// Returns an empty list if the type has no name.
    pub async fn breeds(&self, client: &PetfinderClient) -> Result<Vec<Breed>> {
        match &self.name {
            Some(name) => get_breeds(client, name).await,
            None => Ok(Vec::new()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TypesEnvelope {
    types: Option<Vec<AnimalType>>,
}

#[derive(Debug, Deserialize)]
struct TypeEnvelope {
    #[serde(rename = "type")]
    animal_type: Option<AnimalType>,
}

#[derive(Debug, Deserialize)]
struct BreedsEnvelope {
    breeds: Option<Vec<Breed>>,
}

#[async_trait]
impl Get for AnimalType {
    type Id = str; // type name, e.g. "dog"

    #[tracing::instrument(skip(client))]
    async fn get(client: &PetfinderClient, name: &str) -> Result<Self> {
        let path = format!("/types/{}", urlencoding::encode(name));
        let body = client.send_get_request(&path).await?;
        let envelope: TypeEnvelope = decode(&body, "type")?;
        require(envelope.animal_type, "type")
    }
}

/// Fetch every animal type.
///
/// # Example
///
/// ```ignore
/// let types = petfinder::get_all_types(&client).await?;
/// for t in &types {
///     println!("{}", t.name.as_deref().unwrap_or("N/A"));
/// }
/// ```
#[tracing::instrument(skip(client))]
pub async fn get_all_types(client: &PetfinderClient) -> Result<Vec<AnimalType>> {
    let body = client.send_get_request("/types").await?;
    let envelope: TypesEnvelope = decode(&body, "types")?;
    let types = require(envelope.types, "types")?;
    tracing::debug!(count = types.len(), "Fetched animal types");
    Ok(types)
}

/// Fetch the breeds of an animal type.
///
/// # Arguments
///
/// * `client` - The Petfinder API client
/// * `animal_type` - Type name (e.g., "dog")
#[tracing::instrument(skip(client))]
pub async fn get_breeds(client: &PetfinderClient, animal_type: &str) -> Result<Vec<Breed>> {
    let path = format!("/types/{}/breeds", urlencoding::encode(animal_type));
    let body = client.send_get_request(&path).await?;
    let envelope: BreedsEnvelope = decode(&body, "breeds")?;
    require(envelope.breeds, "breeds")
}
