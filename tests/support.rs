//! Shared helpers for wiremock-based tests.

#![allow(dead_code)]

use petfinder::PetfinderClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token endpoint response carrying `token`.
pub fn token_response(token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "token_type": "Bearer",
        "expires_in": 3600,
        "access_token": token
    }))
}

/// Mount a token endpoint that always issues `token`.
pub async fn mount_token(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(token_response(token))
        .mount(server)
        .await;
}

/// Client authenticated against `server` with token `test-token`.
pub async fn client_for(server: &MockServer) -> PetfinderClient {
    mount_token(server, "test-token").await;
    PetfinderClient::new("test-id", "test-secret", &server.uri())
        .await
        .expect("client should authenticate")
}
