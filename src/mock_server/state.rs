//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Petfinder API server.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Animal, AnimalType, Breed, Credentials, Organization};

/// State handle shared by the server and its handlers.
pub type SharedState = Arc<RwLock<MockState>>;

/// Records and token bookkeeping behind the mock API.
#[derive(Debug, Default)]
pub struct MockState {
    /// Animal types in listing order.
    pub types: Vec<AnimalType>,

    /// Breeds indexed by lowercase type name.
    pub breeds: HashMap<String, Vec<Breed>>,

    /// Animals indexed by id.
    pub animals: BTreeMap<u64, Animal>,

    /// Organizations indexed by uppercase id.
    pub organizations: BTreeMap<String, Organization>,

    /// Credentials the token endpoint accepts. `None` accepts any.
    pub credentials: Option<Credentials>,

    /// Tokens issued so far, oldest first.
    pub issued_tokens: Vec<String>,

    /// When set, only the most recently issued token is accepted.
    pub revoke_on_reissue: bool,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the state for use by a running server.
    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Add an animal type to the state.
    pub fn with_type(mut self, animal_type: AnimalType) -> Self {
        self.types.push(animal_type);
        self
    }

    /// Add breeds for a type.
    pub fn with_breeds(mut self, type_name: &str, breeds: Vec<Breed>) -> Self {
        self.breeds.insert(type_name.to_lowercase(), breeds);
        self
    }

    /// Add an animal to the state.
    pub fn with_animal(mut self, animal: Animal) -> Self {
        if let Some(id) = animal.id {
            self.animals.insert(id, animal);
        }
        self
    }

    /// Add an organization to the state.
    pub fn with_organization(mut self, organization: Organization) -> Self {
        if let Some(id) = organization.id.clone() {
            self.organizations.insert(id.to_uppercase(), organization);
        }
        self
    }

    /// Only accept these credentials at the token endpoint.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Invalidate older tokens whenever a new one is issued.
    pub fn with_revoke_on_reissue(mut self) -> Self {
        self.revoke_on_reissue = true;
        self
    }

    /// Check a credential pair against the configured credentials.
    pub fn accepts_credentials(&self, client_id: &str, client_secret: &str) -> bool {
        self.credentials
            .as_ref()
            .map(|c| c.client_id == client_id && c.client_secret == client_secret)
            .unwrap_or(true)
    }

    /// Issue a new access token.
    pub fn issue_token(&mut self) -> String {
        let token = format!("mock-token-{}", self.issued_tokens.len() + 1);
        self.issued_tokens.push(token.clone());
        token
    }

    /// Check whether a bearer token is currently valid.
    pub fn is_token_valid(&self, token: &str) -> bool {
        if self.revoke_on_reissue {
            self.issued_tokens.last().map(|t| t == token).unwrap_or(false)
        } else {
            self.issued_tokens.iter().any(|t| t == token)
        }
    }

    /// Get an animal type by case-insensitive name.
    pub fn get_type(&self, name: &str) -> Option<&AnimalType> {
        self.types.iter().find(|t| {
            t.name
                .as_deref()
                .map(|n| n.eq_ignore_ascii_case(name))
                .unwrap_or(false)
        })
    }

    /// Get the breeds of a type.
    pub fn get_breeds(&self, type_name: &str) -> Option<&Vec<Breed>> {
        self.breeds.get(&type_name.to_lowercase())
    }

    /// Get an animal by id.
    pub fn get_animal(&self, id: u64) -> Option<&Animal> {
        self.animals.get(&id)
    }

    /// Get an organization by case-insensitive id.
    pub fn get_organization(&self, id: &str) -> Option<&Organization> {
        self.organizations.get(&id.to_uppercase())
    }

    /// List animals matching the optional filters.
    pub fn list_animals(
        &self,
        animal_type: Option<&str>,
        coat: Option<&str>,
        organization: Option<&str>,
    ) -> Vec<&Animal> {
        self.animals
            .values()
            .filter(|a| matches_filter(a.animal_type.as_deref(), animal_type))
            .filter(|a| matches_filter(a.coat.as_deref(), coat))
            .filter(|a| matches_filter(a.organization_id.as_deref(), organization))
            .collect()
    }

    /// List organizations, optionally filtered by state.
    pub fn list_organizations(&self, state: Option<&str>) -> Vec<&Organization> {
        self.organizations
            .values()
            .filter(|o| {
                matches_filter(
                    o.address.as_ref().and_then(|a| a.state.as_deref()),
                    state,
                )
            })
            .collect()
    }
}

fn matches_filter(value: Option<&str>, filter: Option<&str>) -> bool {
    match filter {
        Some(f) => value.map(|v| v.eq_ignore_ascii_case(f)).unwrap_or(false),
        None => true,
    }
}
