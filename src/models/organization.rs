//! Organization records and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{decode, require, Address, Link, Photo};
use crate::client::PetfinderClient;
use crate::error::Result;
use crate::pagination::Pagination;
use crate::query::SearchParams;
use crate::traits::{Get, Search};

/// An animal welfare organization (shelter or rescue).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization id, e.g. "KY422".
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub hours: Option<Hours>,
    pub url: Option<String>,
    pub website: Option<String>,
    pub mission_statement: Option<String>,
    pub adoption: Option<AdoptionPolicy>,
    pub social_media: Option<SocialMedia>,
    pub photos: Option<Vec<Photo>>,
    pub distance: Option<f64>,
    #[serde(rename = "_links")]
    pub links: Option<OrganizationLinks>,
}

/// Opening hours per weekday, as free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hours {
    pub monday: Option<String>,
    pub tuesday: Option<String>,
    pub wednesday: Option<String>,
    pub thursday: Option<String>,
    pub friday: Option<String>,
    pub saturday: Option<String>,
    pub sunday: Option<String>,
}

/// Social media profile URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub instagram: Option<String>,
    pub pinterest: Option<String>,
}

/// Adoption policy text and link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdoptionPolicy {
    pub policy: Option<String>,
    pub url: Option<String>,
}

/// Links attached to an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationLinks {
    #[serde(rename = "self")]
    pub self_link: Option<Link>,
    pub animals: Option<Link>,
}

/// One page of an organization search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationResponse {
    pub organizations: Option<Vec<Organization>>,
    pub pagination: Option<Pagination>,
}

impl Organization {
    /// Search animals listed by this organization.
    ///
    /// Adds `organization={id}` to `params`. Returns an empty response if the
    /// organization has no id.
    pub async fn animals(
        &self,
        client: &PetfinderClient,
        params: &SearchParams,
    ) -> Result<crate::models::AnimalResponse> {
        match &self.id {
            Some(id) => {
                let params = params.clone().with("organization", id.as_str());
                crate::models::get_animals(client, &params).await
            }
            None => Ok(Default::default()),
        }
    }
}

impl OrganizationResponse {
    /// The organizations on this page, empty if none were returned.
    pub fn organizations(&self) -> &[Organization] {
        self.organizations.as_deref().unwrap_or_default()
    }

    /// Total matches across all pages, if reported.
    pub fn total_count(&self) -> Option<u64> {
        self.pagination.as_ref().and_then(|p| p.total_count)
    }
}

#[derive(Debug, Deserialize)]
struct OrganizationEnvelope {
    organization: Option<Organization>,
}

#[async_trait]
impl Get for Organization {
    type Id = str;

    #[tracing::instrument(skip(client))]
    async fn get(client: &PetfinderClient, id: &str) -> Result<Self> {
        let path = format!("/organizations/{}", urlencoding::encode(id));
        let body = client.send_get_request(&path).await?;
        let envelope: OrganizationEnvelope = decode(&body, "organization")?;
        require(envelope.organization, "organization")
    }
}

#[async_trait]
impl Search for Organization {
    type Response = OrganizationResponse;

    #[tracing::instrument(skip(client))]
    async fn search(
        client: &PetfinderClient,
        params: &SearchParams,
    ) -> Result<OrganizationResponse> {
        let path = if params.is_empty() {
            "/organizations".to_string()
        } else {
            format!("/organizations{}", params.create_query_string())
        };

        let body = client.send_get_request(&path).await?;
        let response: OrganizationResponse = decode(&body, "organizations")?;
        tracing::debug!(count = response.organizations().len(), "Fetched organizations");
        Ok(response)
    }
}

// Convenience functions

/// Fetch the first page of organizations without filters.
pub async fn get_organizations(client: &PetfinderClient) -> Result<OrganizationResponse> {
    Organization::search(client, &SearchParams::new()).await
}

/// Fetch one organization by id.
pub async fn get_organization_by_id(client: &PetfinderClient, id: &str) -> Result<Organization> {
    Organization::get(client, id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_deserialize() {
        let json = r#"{
            "id": "KY422",
            "name": "Example Animal Rescue",
            "email": "info@example.org",
            "phone": "(502) 555-0100",
            "address": {
                "address1": null,
                "address2": null,
                "city": "Louisville",
                "state": "KY",
                "postcode": "40202",
                "country": "US"
            },
            "hours": {"monday": "10-5", "sunday": null},
            "url": "https://www.petfinder.com/member/us/ky/louisville/example-ky422/",
            "website": "https://example.org",
            "mission_statement": "Every animal deserves a home.",
            "adoption": {"policy": "Home visit required", "url": null},
            "social_media": {"facebook": "https://facebook.com/example"},
            "photos": [],
            "distance": null,
            "_links": {
                "self": {"href": "/v2/organizations/ky422"},
                "animals": {"href": "/v2/animals?organization=ky422"}
            }
        }"#;

        let org: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(org.id.as_deref(), Some("KY422"));
        assert_eq!(
            org.address.as_ref().and_then(|a| a.locality()).as_deref(),
            Some("Louisville, KY")
        );
        assert_eq!(org.hours.as_ref().and_then(|h| h.monday.as_deref()), Some("10-5"));
        assert_eq!(
            org.links
                .as_ref()
                .and_then(|l| l.animals.as_ref())
                .and_then(|l| l.href.as_deref()),
            Some("/v2/animals?organization=ky422")
        );
    }

    #[test]
    fn test_organization_response_deserialize() {
        let response: OrganizationResponse = serde_json::from_value(serde_json::json!({
            "organizations": [{"id": "KY422"}, {"id": "NJ333"}],
            "pagination": {"count_per_page": 20, "total_count": 2, "current_page": 1, "total_pages": 1}
        }))
        .unwrap();

        assert_eq!(response.organizations().len(), 2);
        assert_eq!(response.total_count(), Some(2));
    }
}
