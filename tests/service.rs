//! HTTP service tests.
//!
//! The service runs on a loopback port in front of a wiremock Petfinder API.

mod support;

use std::sync::Arc;

use petfinder::service::{router, ServiceState};
use reqwest::header::ORIGIN;
use support::client_for;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serve the router on a free port and return its base URL.
async fn spawn_service(state: ServiceState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn service_for(api: &MockServer) -> String {
    let client = client_for(api).await;
    spawn_service(ServiceState::with_client(Arc::new(client))).await
}

#[tokio::test]
async fn test_nearby_searches_by_distance() {
    let api = MockServer::start().await;
    let service = service_for(&api).await;

    Mock::given(method("GET"))
        .and(path("/animals"))
        .and(query_param("location", "40202"))
        .and(query_param("distance", "25"))
        .and(query_param("sort", "distance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "animals": [
                {"id": 1, "name": "Rex", "distance": 0.4},
                {"id": 2, "name": "Bella", "distance": 3.1}
            ],
            "pagination": {"total_count": 2}
        })))
        .expect(1)
        .mount(&api)
        .await;

    let response = reqwest::Client::new()
        .get(format!("{service}/nearby?zip=40202&distance=25"))
        .header(ORIGIN, "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let animals: Vec<serde_json::Value> = response.json().await.unwrap();
    assert_eq!(animals.len(), 2);
    assert_eq!(animals[0]["name"], "Rex");
}

#[tokio::test]
async fn test_nearby_without_location_sends_empty_values() {
    let api = MockServer::start().await;
    let service = service_for(&api).await;

    Mock::given(method("GET"))
        .and(path("/animals"))
        .and(query_param("location", ""))
        .and(query_param("distance", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&api)
        .await;

    let animals: Vec<serde_json::Value> = reqwest::get(format!("{service}/nearby"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(animals.is_empty());
}

#[tokio::test]
async fn test_findpet_returns_animal() {
    let api = MockServer::start().await;
    let service = service_for(&api).await;

    Mock::given(method("GET"))
        .and(path("/animals/68670528"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "animal": {"id": 68670528, "name": "Rex", "species": "Dog"}
        })))
        .mount(&api)
        .await;

    let animal: serde_json::Value = reqwest::get(format!("{service}/findpet/68670528"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(animal["id"], 68670528);
    assert_eq!(animal["species"], "Dog");
}

#[tokio::test]
async fn test_findpet_upstream_failure_is_500() {
    let api = MockServer::start().await;
    let service = service_for(&api).await;

    Mock::given(method("GET"))
        .and(path("/animals/1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "Not Found"})),
        )
        .mount(&api)
        .await;

    let response = reqwest::get(format!("{service}/findpet/1")).await.unwrap();

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(
        response.text().await.unwrap(),
        "Failed to retrieve animal details"
    );
}

#[tokio::test]
async fn test_nearby_undecodable_upstream_is_500() {
    let api = MockServer::start().await;
    let service = service_for(&api).await;

    Mock::given(method("GET"))
        .and(path("/animals"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&api)
        .await;

    let response = reqwest::get(format!("{service}/nearby?zip=40202"))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
}
