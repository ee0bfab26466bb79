//! Petfinder HTTP service.
//!
//! Serves `/nearby` and `/findpet/{id}` on `PF_SERVICE_ADDR` (default
//! `0.0.0.0:8081`). Credentials are read like the tour binary, and the
//! shared client is created before the listener opens so that bad
//! credentials stop the process at startup.

use std::process::ExitCode;

use petfinder::config;
use petfinder::service::{router, ServiceState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    if dotenvy::from_filename("config.env").is_err() {
        let _ = dotenvy::dotenv();
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = petfinder::get_client().await {
        tracing::error!("Error: {e}");
        eprintln!("Hint: Set PF_CLIENT_ID and PF_CLIENT_SECRET environment variables");
        return ExitCode::FAILURE;
    }

    let addr = config::service_addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, "Failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(%addr, "Petfinder service listening");

    let served = axum::serve(listener, router(ServiceState::shared()))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await;

    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server error: {e}");
            ExitCode::FAILURE
        }
    }
}
