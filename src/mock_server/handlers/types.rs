//! Animal type endpoint handlers.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::{authorize, problem};
use crate::mock_server::state::SharedState;

/// GET /types
pub async fn list_types(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    Json(serde_json::json!({ "types": state.types })).into_response()
}

/// GET /types/{type}
pub async fn get_type(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.get_type(&name) {
        Some(animal_type) => Json(serde_json::json!({ "type": animal_type })).into_response(),
        None => problem(StatusCode::NOT_FOUND, "Not Found"),
    }
}

/// GET /types/{type}/breeds
pub async fn list_breeds(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.get_breeds(&name) {
        Some(breeds) => Json(serde_json::json!({ "breeds": breeds })).into_response(),
        None => problem(StatusCode::NOT_FOUND, "Not Found"),
    }
}
