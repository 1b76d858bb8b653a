//! Campus Registry service (v1)
//!
//! A JSON API over two related entities, universities and students.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ ┌────────────┐   ┌──────────────────────┐   ┌──────────────┐
//!                     │ http       │──▶│ handlers             │──▶│ repository   │
//!                     │ server     │   │ universities/students│   │ university/  │
//!                     │ + layers   │   │ validate, map status │   │ student      │
//!     ◀────────────── └────────────┘◀──└──────────────────────┘◀──└──────┬───────┘
//!     Client Response                                                    │
//!                                                                 ┌──────▼───────┐
//!                                                                 │ store        │
//!                                                                 │ SQLite pool  │
//!                                                                 └──────────────┘
//!
//!     Cross-cutting: config · observability (logs, metrics) · lifecycle
//! ```

use campus_registry::config;
use campus_registry::lifecycle::{startup, StartupError};
use campus_registry::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return Err(StartupError::from(e).into());
        }
    };

    logging::init_logging(&config.observability);

    tracing::info!("campus-registry v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        database_url = %config.database.url,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if let Err(e) = startup::run(config).await {
        tracing::error!(error = %e, "Service stopped with an error");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
