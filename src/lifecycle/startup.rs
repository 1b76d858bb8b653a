//! Startup orchestration.
//!
//! Order: metrics exporter → store (connect, sync schema) → listener →
//! serve. Any failure before serving is fatal; the store is closed after the
//! server has drained.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ConfigError, RegistryConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;
use crate::store::{Store, StoreError};

/// Errors that stop the service.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("metrics exporter failed: {0}")]
    Metrics(String),

    #[error("error connecting to database: {0}")]
    Store(#[from] StoreError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error after it started serving.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Open the store and bind the listener; nothing is served yet.
pub async fn prepare(config: &RegistryConfig) -> Result<(Store, TcpListener), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|e: std::net::AddrParseError| StartupError::Metrics(e.to_string()))?;
        metrics::init_metrics(addr).map_err(StartupError::Metrics)?;
    }

    let store = Store::open(&config.database).await?;
    tracing::info!(url = %config.database.url, "Database connected successfully");

    let address = config.listener.bind_address();
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(source) => {
            store.close().await;
            return Err(StartupError::Bind { address, source });
        }
    };

    Ok((store, listener))
}

/// Run the service until SIGINT/SIGTERM.
pub async fn run(config: RegistryConfig) -> Result<(), StartupError> {
    let (store, listener) = prepare(&config).await?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(config, store.clone());
    let result = server.run(listener, shutdown.subscribe()).await;

    store.close().await;
    result.map_err(StartupError::Serve)
}
