//! In-process Petfinder API served by axum.

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::{MockState, SharedState};

/// A running mock API bound to a loopback port.
///
/// Pass [`url`](Self::url) as the client's base URL. Routes are mounted
/// without the `/v2` prefix, the same way the client joins paths onto the
/// base URL.
pub struct MockServer {
    url: String,
    state: SharedState,
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl MockServer {
    /// Serve the default scenario.
    ///
    /// The token endpoint only accepts [`Fixtures::credentials`].
    pub async fn start() -> Self {
        let state = scenario_state(Fixtures::default_scenario())
            .with_credentials(Fixtures::credentials());
        Self::with_state(state).await
    }

    /// Serve no records and accept any credentials.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Serve `state`.
    pub async fn with_state(state: MockState) -> Self {
        let state = state.shared();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("mock server could not bind a loopback port");
        let addr = listener
            .local_addr()
            .expect("bound listener has no local address");

        let (stop, stopped) = oneshot::channel::<()>();
        let app = router(state.clone());
        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = stopped.await;
                })
                .await
                .expect("mock server terminated unexpectedly");
        });

        tracing::debug!(%addr, "Mock Petfinder server listening");

        Self {
            url: format!("http://{addr}"),
            state,
            stop: Some(stop),
            task,
        }
    }

    /// Base URL of the server, without a trailing slash.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Handle to the live state, for inspection or mutation mid-test.
    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    /// Number of access tokens issued so far.
    pub async fn tokens_issued(&self) -> usize {
        self.state.read().await.issued_tokens.len()
    }

    /// Stop accepting connections and wait for the server task to end.
    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        let _ = (&mut self.task).await;
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn scenario_state(scenario: DefaultScenario) -> MockState {
    let state = scenario
        .types
        .into_iter()
        .fold(MockState::new(), MockState::with_type);
    let state = scenario
        .breeds
        .into_iter()
        .fold(state, |s, (name, breeds)| s.with_breeds(&name, breeds));
    let state = scenario
        .animals
        .into_iter()
        .fold(state, MockState::with_animal);
    scenario
        .organizations
        .into_iter()
        .fold(state, MockState::with_organization)
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/oauth2/token", post(handlers::issue_token))
        .route("/types", get(handlers::list_types))
        .route("/types/:name", get(handlers::get_type))
        .route("/types/:name/breeds", get(handlers::list_breeds))
        .route("/animals", get(handlers::search_animals))
        .route("/animals/:id", get(handlers::get_animal))
        .route("/organizations", get(handlers::search_organizations))
        .route("/organizations/:id", get(handlers::get_organization))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}
