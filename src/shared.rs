//! Process-wide shared client.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::client::PetfinderClient;
use crate::error::Result;

static SHARED: OnceCell<Result<Arc<PetfinderClient>>> = OnceCell::const_new();

/// Get the process-wide client, creating it on first use.
///
/// The first call reads the credentials from the environment and performs
/// the token exchange. Concurrent first calls wait on that single attempt and
/// all receive its outcome. A failed attempt is kept: every later call
/// returns the same error until the process restarts.
///
/// To refresh the token, call [`PetfinderClient::refresh`] on the returned
/// client.
///
/// # Errors
///
/// Returns the configuration or auth error of the initialization attempt.
pub async fn get_client() -> Result<Arc<PetfinderClient>> {
    tracing::debug!("get_client called");

    let outcome = SHARED
        .get_or_init(|| async {
            tracing::info!("Attempting to initialize shared client");
            let result = PetfinderClient::from_env().await.map(Arc::new);
            if let Err(e) = &result {
                tracing::error!(error = %e, "Error initializing shared client");
            }
            result
        })
        .await;

    outcome.clone()
}
