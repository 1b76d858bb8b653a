//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use campus_registry::config::DatabaseConfig;
use campus_registry::{HttpServer, RegistryConfig, Shutdown, Store};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Configuration pointing at a private in-memory database.
pub fn test_config() -> RegistryConfig {
    let mut config = RegistryConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.database = DatabaseConfig::in_memory();
    config
}

/// A fully layered router over a fresh, empty store.
#[allow(dead_code)]
pub async fn test_app() -> (Router, Store) {
    let config = test_config();
    let store = Store::open(&config.database).await.unwrap();
    let server = HttpServer::new(config, store.clone());
    (server.router(), store)
}

/// Drive one request through the router and decode the JSON body
/// (`Value::Null` when the body is empty).
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Run the real server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_server() -> (SocketAddr, Shutdown, Store) {
    let config = test_config();
    let store = Store::open(&config.database).await.unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store.clone());
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown, store)
}
