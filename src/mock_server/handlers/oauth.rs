//! OAuth2 token endpoint handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;

use super::problem;
use crate::mock_server::state::SharedState;

/// Form body of a token request.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub grant_type: String,
    pub client_id: String,
    pub client_secret: String,
}

/// POST /oauth2/token
pub async fn issue_token(
    State(state): State<SharedState>,
    Form(request): Form<TokenRequest>,
) -> Response {
    if request.grant_type != "client_credentials" {
        return problem(StatusCode::BAD_REQUEST, "Unsupported grant type");
    }

    let mut state = state.write().await;

    if !state.accepts_credentials(&request.client_id, &request.client_secret) {
        return problem(StatusCode::UNAUTHORIZED, "Client authentication failed");
    }

    let token = state.issue_token();
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "token_type": "Bearer",
            "expires_in": 3600,
            "access_token": token
        })),
    )
        .into_response()
}
