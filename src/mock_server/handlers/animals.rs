//! Animal endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{active_filters, authorize, paginate, problem};
use crate::mock_server::state::SharedState;
use crate::{Animal, AnimalResponse};

/// Query parameters for searching animals.
#[derive(Debug, Default, Deserialize)]
pub struct SearchAnimalsQuery {
    #[serde(rename = "type")]
    pub animal_type: Option<String>,
    pub coat: Option<String>,
    pub organization: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// GET /animals/{id}
pub async fn get_animal(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match id.parse::<u64>().ok().and_then(|id| state.get_animal(id)) {
        Some(animal) => Json(serde_json::json!({ "animal": animal })).into_response(),
        None => problem(StatusCode::NOT_FOUND, "Not Found"),
    }
}

/// GET /animals
pub async fn search_animals(
    State(state): State<SharedState>,
    Query(query): Query<SearchAnimalsQuery>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    let matches = state.list_animals(
        query.animal_type.as_deref(),
        query.coat.as_deref(),
        query.organization.as_deref(),
    );
    let filters = active_filters([
        ("type", query.animal_type.as_deref()),
        ("coat", query.coat.as_deref()),
        ("organization", query.organization.as_deref()),
    ]);
    let (animals, pagination): (Vec<Animal>, _) =
        paginate(&matches, query.page, query.limit, "/animals", &filters);

    Json(AnimalResponse {
        animals: Some(animals),
        pagination: Some(pagination),
    })
    .into_response()
}
