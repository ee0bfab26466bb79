//! Stateful mock of the Petfinder API, enabled by the `test-server` feature.
//!
//! Serves the token endpoint and the read-only resource routes from memory
//! and checks bearer tokens on every resource request. Tokens it issues stay
//! recorded, so tests can count exchanges or revoke older tokens to force a
//! refresh. For one-off canned responses, wiremock is the lighter choice.
//!
//! ```ignore
//! use petfinder::mock_server::{MockServer, TEST_CLIENT_ID, TEST_CLIENT_SECRET};
//! use petfinder::{Animal, Get, PetfinderClient};
//!
//! let server = MockServer::start().await;
//! let client = PetfinderClient::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET, server.url()).await?;
//!
//! let rex = Animal::get(&client, "68670528").await?;
//! assert_eq!(rex.name.as_deref(), Some("Rex"));
//!
//! server.shutdown().await;
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures, TEST_CLIENT_ID, TEST_CLIENT_SECRET};
pub use server::MockServer;
pub use state::{MockState, SharedState};
