//! End-to-end tests against the mock Petfinder server.
//!
//! Run with: `cargo test --features test-server --test e2e_mock_server`

#![cfg(feature = "test-server")]

use petfinder::mock_server::{Fixtures, MockServer, MockState, TEST_CLIENT_ID, TEST_CLIENT_SECRET};
use petfinder::{
    get_all_types, get_animals, get_breeds, get_organizations, Animal, AnimalResponse, AnimalType,
    ErrorKind, Get, Organization, PetfinderClient, Search, SearchParams,
};

async fn connect(server: &MockServer) -> PetfinderClient {
    PetfinderClient::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET, server.url())
        .await
        .expect("client should authenticate against mock server")
}

#[tokio::test]
async fn test_types_and_breeds() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    let types = get_all_types(&client).await.unwrap();
    let names: Vec<_> = types.iter().filter_map(|t| t.name.as_deref()).collect();
    assert_eq!(names, vec!["Dog", "Cat"]);

    let dog = AnimalType::get(&client, "dog").await.unwrap();
    assert_eq!(dog.self_href(), Some("/v2/types/dog"));

    let breeds = get_breeds(&client, "dog").await.unwrap();
    assert_eq!(breeds.len(), 2);

    let via_type = dog.breeds(&client).await.unwrap();
    assert_eq!(via_type, breeds);

    server.shutdown().await;
}

#[tokio::test]
async fn test_animal_tour() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    let rex = Animal::get(&client, "68670528").await.unwrap();
    assert_eq!(rex.name.as_deref(), Some("Rex"));
    assert!(rex.is_adoptable());

    let params = SearchParams::new().with("type", "Dog").with("coat", "Medium");
    let response = get_animals(&client, &params).await.unwrap();
    assert_eq!(response.animals().len(), 1);
    assert_eq!(response.animals()[0].id, Some(68670528));
    assert_eq!(response.total_count(), Some(1));

    server.shutdown().await;
}

#[tokio::test]
async fn test_search_pagination() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    let first = Animal::search(&client, &SearchParams::new().with("limit", "2"))
        .await
        .unwrap();
    let pagination = first.pagination.clone().unwrap();
    assert_eq!(first.animals().len(), 2);
    assert_eq!(pagination.total_count, Some(3));
    assert_eq!(pagination.next_page(), Some(2));

    let params = SearchParams::new()
        .with("limit", "2")
        .with("page", pagination.next_page().unwrap().to_string());
    let second = Animal::search(&client, &params).await.unwrap();
    assert_eq!(second.animals().len(), 1);
    assert!(!second.pagination.unwrap().has_next());

    server.shutdown().await;
}

#[tokio::test]
async fn test_next_link_keeps_search_filters() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    let params = SearchParams::new().with("type", "Dog").with("limit", "1");
    let first = Animal::search(&client, &params).await.unwrap();
    let next = first.pagination.unwrap().next_href().unwrap().to_string();
    assert!(next.contains("type=Dog"), "{next}");

    // Hrefs are rooted at the API host; the mock serves without the version prefix
    let body = client
        .send_get_request(next.trim_start_matches("/v2"))
        .await
        .unwrap();
    let second: AnimalResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(second.animals().len(), 1);
    assert_eq!(second.animals()[0].species.as_deref(), Some("Dog"));
    assert_ne!(second.animals()[0].id, first.animals.unwrap()[0].id);

    server.shutdown().await;
}

#[tokio::test]
async fn test_organization_then_its_animals() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    let orgs = get_organizations(&client).await.unwrap();
    assert_eq!(orgs.organizations().len(), 2);

    let kentucky = Organization::search(&client, &SearchParams::new().with("state", "KY"))
        .await
        .unwrap();
    assert_eq!(kentucky.organizations().len(), 1);

    let org = Organization::get(&client, "KY422").await.unwrap();
    assert_eq!(org.name.as_deref(), Some("Test Animal Rescue"));

    let animals = org.animals(&client, &SearchParams::new()).await.unwrap();
    assert_eq!(animals.animals().len(), 2);
    assert!(animals
        .animals()
        .iter()
        .all(|a| a.organization_id.as_deref() == Some("KY422")));

    server.shutdown().await;
}

#[tokio::test]
async fn test_not_found_is_transport_error() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    let err = Animal::get(&client, "1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status_code(), Some(404));
    assert!(err.to_string().contains("Not Found"));

    let err = Organization::get(&client, "XX000").await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    server.shutdown().await;
}

#[tokio::test]
async fn test_refresh_after_revocation() {
    let state = MockState::new()
        .with_animal(Fixtures::minimal_animal(7, "Pip", "Rabbit"))
        .with_revoke_on_reissue();
    let server = MockServer::with_state(state).await;
    let client = connect(&server).await;

    // Another consumer takes a token, invalidating ours
    PetfinderClient::new("other", "client", server.url())
        .await
        .unwrap();

    let err = Animal::get(&client, "7").await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));

    client.refresh().await.unwrap();
    assert_eq!(server.tokens_issued().await, 3);

    let animal = Animal::get(&client, "7").await.unwrap();
    assert_eq!(animal.species.as_deref(), Some("Rabbit"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_wrong_credentials_rejected() {
    let server = MockServer::start().await;

    let err = PetfinderClient::new(TEST_CLIENT_ID, "wrong", server.url())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Auth);
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(server.tokens_issued().await, 0);

    server.shutdown().await;
}
