//! Organization endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{active_filters, authorize, paginate, problem};
use crate::mock_server::state::SharedState;
use crate::{Organization, OrganizationResponse};

/// Query parameters for searching organizations.
#[derive(Debug, Default, Deserialize)]
pub struct SearchOrganizationsQuery {
    pub state: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// GET /organizations/{id}
pub async fn get_organization(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.get_organization(&id) {
        Some(org) => Json(serde_json::json!({ "organization": org })).into_response(),
        None => problem(StatusCode::NOT_FOUND, "Not Found"),
    }
}

/// GET /organizations
pub async fn search_organizations(
    State(state): State<SharedState>,
    Query(query): Query<SearchOrganizationsQuery>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    let matches = state.list_organizations(query.state.as_deref());
    let filters = active_filters([("state", query.state.as_deref())]);
    let (organizations, pagination): (Vec<Organization>, _) =
        paginate(&matches, query.page, query.limit, "/organizations", &filters);

    Json(OrganizationResponse {
        organizations: Some(organizations),
        pagination: Some(pagination),
    })
    .into_response()
}
