//! HTTP front end for browser clients.
//!
//! Serves two read-only routes backed by a [`PetfinderClient`]:
//!
//! - `GET /nearby?zip=&distance=` returns the animals near a postcode,
//!   closest first, as a JSON array.
//! - `GET /findpet/{id}` returns one animal as JSON.
//!
//! Any origin may call the routes. A client that cannot be created, or a
//! Petfinder call that fails, answers `500` with a short plain-text reason.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

use crate::client::PetfinderClient;
use crate::error::PetfinderError;
use crate::query::SearchParams;
use crate::shared::get_client;
use crate::traits::{Get, Search};
use crate::Animal;

/// Where request handlers obtain their client.
#[derive(Debug, Clone)]
pub struct ServiceState {
    client: Option<Arc<PetfinderClient>>,
}

impl ServiceState {
    /// Use the process-wide client from [`get_client`].
    pub fn shared() -> Self {
        Self { client: None }
    }

    /// Use an already authenticated client.
    pub fn with_client(client: Arc<PetfinderClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    async fn client(&self) -> Result<Arc<PetfinderClient>, ServiceError> {
        match &self.client {
            Some(client) => Ok(client.clone()),
            None => get_client().await.map_err(ServiceError::ClientUnavailable),
        }
    }
}

/// Failure of a service request, answered with `500`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to initialize Petfinder client")]
    ClientUnavailable(#[source] PetfinderError),

    #[error("Failed to retrieve animal details")]
    Fetch(#[source] PetfinderError),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match &self {
            Self::ClientUnavailable(e) | Self::Fetch(e) => {
                tracing::error!(error = %e, "{self}");
            }
        }
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Query string of `GET /nearby`.
#[derive(Debug, Default, Deserialize)]
pub struct NearbyQuery {
    pub zip: Option<String>,
    pub distance: Option<String>,
}

/// Build the router with CORS open to every origin.
pub fn router(state: ServiceState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::POST]);

    Router::new()
        .route("/nearby", get(nearby))
        .route("/findpet/:id", get(find_pet))
        .layer(cors)
        .with_state(state)
}

/// Search parameters for a nearby lookup.
///
/// Absent `zip` or `distance` are still sent, with empty values.
fn nearby_params(query: NearbyQuery) -> SearchParams {
    let mut params = SearchParams::new();
    params
        .add_optional_param("location", query.zip)
        .add_optional_param("distance", query.distance)
        .add_param("sort", "distance");
    params
}

/// GET /nearby
async fn nearby(
    State(state): State<ServiceState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<Animal>>, ServiceError> {
    tracing::debug!(?query, "Nearby lookup");
    let client = state.client().await?;
    let page = Animal::search(&client, &nearby_params(query))
        .await
        .map_err(ServiceError::Fetch)?;

    Ok(Json(page.animals.unwrap_or_default()))
}

/// GET /findpet/{id}
async fn find_pet(
    State(state): State<ServiceState>,
    Path(id): Path<String>,
) -> Result<Json<Animal>, ServiceError> {
    tracing::debug!(%id, "Pet lookup");
    let client = state.client().await?;
    let animal = Animal::get(&client, &id)
        .await
        .map_err(ServiceError::Fetch)?;

    Ok(Json(animal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearby_params_order() {
        let params = nearby_params(NearbyQuery {
            zip: Some("40202".into()),
            distance: Some("25".into()),
        });

        assert_eq!(
            params.create_query_string(),
            "?location=40202&distance=25&sort=distance"
        );
    }

    #[test]
    fn test_nearby_params_missing_values_sent_empty() {
        let params = nearby_params(NearbyQuery::default());

        assert_eq!(params.create_query_string(), "?location=&distance=&sort=distance");
    }

    #[test]
    fn test_service_error_messages() {
        let fetch = ServiceError::Fetch(PetfinderError::MissingKey("animal"));
        assert_eq!(fetch.to_string(), "Failed to retrieve animal details");

        let init = ServiceError::ClientUnavailable(PetfinderError::NotAuthenticated);
        assert_eq!(
            init.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
