//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{
    Address, Animal, AnimalBreeds, AnimalType, Breed, BreedLinks, Colors, Contact, Credentials,
    Link, Organization, OrganizationLinks, Photo, TypeLinks,
};

/// Client id accepted by the default scenario.
pub const TEST_CLIENT_ID: &str = "test-client-id";

/// Client secret accepted by the default scenario.
pub const TEST_CLIENT_SECRET: &str = "test-client-secret";

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Type Fixtures
    // =========================================================================

    /// Create an animal type with links derived from its name.
    pub fn animal_type(name: &str, coats: &[&str], colors: &[&str]) -> AnimalType {
        let slug = name.to_lowercase();
        AnimalType {
            name: Some(name.to_string()),
            coats: Some(coats.iter().map(|c| c.to_string()).collect()),
            genders: Some(vec!["Male".to_string(), "Female".to_string()]),
            colors: Some(colors.iter().map(|c| c.to_string()).collect()),
            links: Some(TypeLinks {
                self_link: Some(href(&format!("/v2/types/{slug}"))),
                breeds: Some(href(&format!("/v2/types/{slug}/breeds"))),
            }),
        }
    }

    /// Create a breed belonging to a type.
    pub fn breed(name: &str, type_name: &str) -> Breed {
        Breed {
            name: Some(name.to_string()),
            links: Some(BreedLinks {
                animal_type: Some(href(&format!("/v2/types/{}", type_name.to_lowercase()))),
            }),
        }
    }

    // =========================================================================
    // Animal Fixtures
    // =========================================================================

    /// Create a minimal animal with id, name and species.
    pub fn minimal_animal(id: u64, name: &str, species: &str) -> Animal {
        Animal {
            id: Some(id),
            name: Some(name.to_string()),
            species: Some(species.to_string()),
            animal_type: Some(species.to_string()),
            ..Default::default()
        }
    }

    /// Create an adoptable animal listed by an organization.
    pub fn adoptable_animal(
        id: u64,
        name: &str,
        species: &str,
        coat: &str,
        organization_id: &str,
    ) -> Animal {
        let mut animal = Self::minimal_animal(id, name, species);
        animal.organization_id = Some(organization_id.to_string());
        animal.coat = Some(coat.to_string());
        animal.status = Some("adoptable".to_string());
        animal.age = Some("Young".to_string());
        animal.breeds = Some(AnimalBreeds {
            primary: Some("Mixed Breed".to_string()),
            mixed: Some(true),
            unknown: Some(false),
            ..Default::default()
        });
        animal.colors = Some(Colors {
            primary: Some("Black".to_string()),
            ..Default::default()
        });
        animal.photos = Some(vec![Photo {
            medium: Some(format!("https://photos.example.org/{id}/medium.jpg")),
            ..Default::default()
        }]);
        animal.contact = Some(Contact {
            email: Some(format!("adopt@{}.example.org", organization_id.to_lowercase())),
            ..Default::default()
        });
        animal
    }

    // =========================================================================
    // Organization Fixtures
    // =========================================================================

    /// Create an organization located in a city.
    pub fn organization(id: &str, name: &str, city: &str, state: &str) -> Organization {
        let slug = id.to_lowercase();
        Organization {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            address: Some(Address {
                city: Some(city.to_string()),
                state: Some(state.to_string()),
                country: Some("US".to_string()),
                ..Default::default()
            }),
            links: Some(OrganizationLinks {
                self_link: Some(href(&format!("/v2/organizations/{slug}"))),
                animals: Some(href(&format!("/v2/animals?organization={slug}"))),
            }),
            ..Default::default()
        }
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Credentials accepted by the default scenario.
    pub fn credentials() -> Credentials {
        Credentials::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET)
    }

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

fn href(path: &str) -> Link {
    Link {
        href: Some(path.to_string()),
    }
}

/// A complete test scenario with related records.
pub struct DefaultScenario {
    pub types: Vec<AnimalType>,
    pub breeds: Vec<(String, Vec<Breed>)>,
    pub animals: Vec<Animal>,
    pub organizations: Vec<Organization>,
}

impl DefaultScenario {
    fn new() -> Self {
        let types = vec![
            Fixtures::animal_type(
                "Dog",
                &["Hairless", "Short", "Medium", "Long", "Wire", "Curly"],
                &["Black", "Brown / Chocolate", "White / Cream"],
            ),
            Fixtures::animal_type("Cat", &["Short", "Medium", "Long"], &["Tabby", "Tuxedo"]),
        ];

        let breeds = vec![
            (
                "dog".to_string(),
                vec![
                    Fixtures::breed("Akita", "Dog"),
                    Fixtures::breed("Labrador Retriever", "Dog"),
                ],
            ),
            ("cat".to_string(), vec![Fixtures::breed("Siamese", "Cat")]),
        ];

        let animals = vec![
            Fixtures::adoptable_animal(68670528, "Rex", "Dog", "Medium", "KY422"),
            Fixtures::adoptable_animal(68670529, "Bella", "Dog", "Short", "KY422"),
            Fixtures::adoptable_animal(68670530, "Milo", "Cat", "Medium", "NJ333"),
        ];

        let organizations = vec![
            Fixtures::organization("KY422", "Test Animal Rescue", "Louisville", "KY"),
            Fixtures::organization("NJ333", "Test Cat Shelter", "Newark", "NJ"),
        ];

        Self {
            types,
            breeds,
            animals,
            organizations,
        }
    }
}
