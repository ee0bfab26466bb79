//! Animal records and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{decode, require, Contact, Photo};
use crate::client::PetfinderClient;
use crate::error::Result;
use crate::pagination::Pagination;
use crate::query::SearchParams;
use crate::traits::{Get, Search};

/// An adoptable animal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: Option<u64>,
    pub organization_id: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub animal_type: Option<String>,
    pub species: Option<String>,
    pub breeds: Option<AnimalBreeds>,
    pub colors: Option<Colors>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub size: Option<String>,
    pub coat: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub photos: Option<Vec<Photo>>,
    pub status: Option<String>,
    pub attributes: Option<Attributes>,
    pub environment: Option<Environment>,
    pub tags: Option<Vec<String>>,
    pub contact: Option<Contact>,
    /// Distance from the searched location, when the search had one.
    pub distance: Option<f64>,
}

/// Breed information of an animal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalBreeds {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub mixed: Option<bool>,
    pub unknown: Option<bool>,
}

/// Coat colors of an animal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
}

/// Care attributes of an animal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub spayed_neutered: Option<bool>,
    pub house_trained: Option<bool>,
    pub declawed: Option<bool>,
    pub special_needs: Option<bool>,
    pub shots_current: Option<bool>,
}

/// Whether an animal gets along with children and other pets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub children: Option<bool>,
    pub dogs: Option<bool>,
    pub cats: Option<bool>,
}

/// One page of an animal search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalResponse {
    pub animals: Option<Vec<Animal>>,
    pub pagination: Option<Pagination>,
}

impl Animal {
    /// Medium-size URLs of all photos that have one.
    pub fn medium_photos(&self) -> impl Iterator<Item = &str> {
        self.photos
            .iter()
            .flatten()
            .filter_map(|p| p.medium.as_deref())
    }

    /// Whether the animal is listed as adoptable.
    pub fn is_adoptable(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("adoptable"))
            .unwrap_or(false)
    }
}

impl AnimalResponse {
    /// The animals on this page, empty if none were returned.
    pub fn animals(&self) -> &[Animal] {
        self.animals.as_deref().unwrap_or_default()
    }

    /// Total matches across all pages, if reported.
    pub fn total_count(&self) -> Option<u64> {
        self.pagination.as_ref().and_then(|p| p.total_count)
    }
}

#[derive(Debug, Deserialize)]
struct AnimalEnvelope {
    animal: Option<Animal>,
}

#[async_trait]
impl Get for Animal {
    type Id = str; // numeric id as a string, e.g. "68670528"

    #[tracing::instrument(skip(client))]
    async fn get(client: &PetfinderClient, id: &str) -> Result<Self> {
        let path = format!("/animals/{}", urlencoding::encode(id));
        let body = client.send_get_request(&path).await?;
        let envelope: AnimalEnvelope = decode(&body, "animal")?;
        require(envelope.animal, "animal")
    }
}

#[async_trait]
impl Search for Animal {
    type Response = AnimalResponse;

    #[tracing::instrument(skip(client))]
    async fn search(client: &PetfinderClient, params: &SearchParams) -> Result<AnimalResponse> {
        let query = params.create_query_string();
        tracing::debug!(%query, "Searching animals");

        let body = client.send_get_request(&format!("/animals{query}")).await?;
        let response: AnimalResponse = decode(&body, "animals")?;
        tracing::debug!(count = response.animals().len(), "Fetched animals");
        Ok(response)
    }
}

// Convenience functions

/// Fetch one animal by id.
pub async fn get_animal_by_id(client: &PetfinderClient, id: &str) -> Result<Animal> {
    Animal::get(client, id).await
}

/// Search animals.
///
/// # Example
///
/// ```ignore
/// use petfinder::{get_animals, SearchParams};
///
/// let mut params = SearchParams::new();
/// params.add_param("type", "Dog");
/// params.add_param("coat", "Medium");
/// let page = get_animals(&client, &params).await?;
/// println!("{:?} matches", page.total_count());
/// ```
pub async fn get_animals(client: &PetfinderClient, params: &SearchParams) -> Result<AnimalResponse> {
    Animal::search(client, params).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_deserialize() {
        let json = r#"{
            "id": 68670528,
            "organization_id": "KY422",
            "url": "https://www.petfinder.com/dog/rex-68670528/ky/louisville/example/",
            "type": "Dog",
            "species": "Dog",
            "breeds": {"primary": "Labrador Retriever", "secondary": null, "mixed": true, "unknown": false},
            "colors": {"primary": "Black", "secondary": null, "tertiary": null},
            "age": "Young",
            "gender": "Male",
            "size": "Large",
            "coat": "Short",
            "attributes": {
                "spayed_neutered": true,
                "house_trained": false,
                "declawed": null,
                "special_needs": false,
                "shots_current": true
            },
            "environment": {"children": true, "dogs": true, "cats": null},
            "tags": ["Friendly", "Playful"],
            "name": "Rex",
            "description": "A very good boy.",
            "photos": [
                {"small": "s.jpg", "medium": "m.jpg", "large": "l.jpg", "full": "f.jpg"},
                {"small": "s2.jpg"}
            ],
            "status": "adoptable",
            "contact": {
                "email": "adopt@example.org",
                "phone": null,
                "address": {"city": "Louisville", "state": "KY", "postcode": "40202", "country": "US"}
            },
            "distance": 3.2
        }"#;

        let animal: Animal = serde_json::from_str(json).unwrap();
        assert_eq!(animal.id, Some(68670528));
        assert_eq!(animal.animal_type.as_deref(), Some("Dog"));
        assert_eq!(animal.breeds.as_ref().and_then(|b| b.mixed), Some(true));
        assert_eq!(animal.attributes.as_ref().and_then(|a| a.declawed), None);
        assert_eq!(animal.medium_photos().collect::<Vec<_>>(), vec!["m.jpg"]);
        assert!(animal.is_adoptable());
    }

    #[test]
    fn test_minimal_animal_deserialize() {
        let animal: Animal =
            serde_json::from_str(r#"{"id": 68670528, "species": "Dog"}"#).unwrap();
        assert_eq!(animal.id, Some(68670528));
        assert_eq!(animal.species.as_deref(), Some("Dog"));
        assert_eq!(animal.name, None);
        assert!(!animal.is_adoptable());
    }

    #[test]
    fn test_animal_response_defaults() {
        let response: AnimalResponse = serde_json::from_str("{}").unwrap();
        assert!(response.animals().is_empty());
        assert_eq!(response.total_count(), None);
    }

    #[test]
    fn test_animal_envelope_null_is_missing() {
        let envelope: AnimalEnvelope = decode(br#"{"animal": null}"#, "animal").unwrap();
        assert!(require(envelope.animal, "animal").is_err());
    }
}
