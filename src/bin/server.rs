//! RPC server for card number validation.
//!
//! # Usage
//!
//! ```bash
//! SERVICE_NAME=cards-service SERVER_PORT=8080 cards-service
//! ```
//!
//! Configuration is read from the environment and an optional `.env` file.
//! `RUST_LOG` overrides the log level derived from `DEBUG`.
//!
//! # Swagger UI
//!
//! Visit http://localhost:8080/swagger-ui/ for interactive API documentation.

use std::process::ExitCode;

use cards_service::config::Config;
use cards_service::server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();

    let default_filter = match &config {
        Ok(config) => config.log_filter(),
        Err(_) => "info",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},tower_http=debug", default_filter).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "could not initialize configuration");
            return ExitCode::FAILURE;
        }
    };

    match server::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}
