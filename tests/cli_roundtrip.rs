//! End-to-end: the real server on a socket, driven by the CLI client.

use campus_registry::cli::args::Cli;
use campus_registry::cli::client::ApiClient;
use campus_registry::cli::{execute, prepare_request};
use clap::Parser;
use reqwest::StatusCode;
use serde_json::json;
use url::Url;

mod common;

fn cli(base: &str, args: &[&str]) -> Cli {
    let mut full = vec!["registry-cli", "--url", base];
    full.extend_from_slice(args);
    Cli::try_parse_from(full).unwrap()
}

#[tokio::test]
async fn test_cli_against_running_server() {
    let (addr, shutdown, store) = common::start_server().await;
    let base = format!("http://{}/api", addr);
    let client = ApiClient::new(Url::parse(&base).unwrap());

    // Canned university payload.
    let request = prepare_request(&cli(&base, &["universities", "post"])).unwrap();
    let response = client.send(&request).await.unwrap();
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], json!("Tech University"));

    // Canned student payload references university 1.
    let request = prepare_request(&cli(&base, &["STUDENTS", "Post"])).unwrap();
    let output = execute(&client, &request).await.unwrap();
    assert!(output.contains("POST /students"));
    assert!(output.contains("Status: 201"));
    assert!(output.contains(r#""facultyNumber": "FN001""#));

    // The server has no student update route; the CLI prints what it got.
    let request = prepare_request(&cli(&base, &["students", "put", "1"])).unwrap();
    let response = client.send(&request).await.unwrap();
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body, json!({"error": "Method not allowed"}));

    let request = prepare_request(&cli(&base, &["universities", "delete", "1"])).unwrap();
    let response = client.send(&request).await.unwrap();
    assert_eq!(response.status, StatusCode::CONFLICT);

    let request = prepare_request(&cli(&base, &["students", "get", "999"])).unwrap();
    let output = execute(&client, &request).await.unwrap();
    assert!(output.contains("Status: 404"));
    assert!(output.contains("Student not found"));

    assert_eq!(store.students().count().await.unwrap(), 1);
    shutdown.trigger();
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let (addr, shutdown, _store) = common::start_server().await;

    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(uuid::Uuid::parse_str(&id).is_ok());

    shutdown.trigger();
}

#[tokio::test]
async fn test_transport_failure_is_an_error() {
    // Nothing listens on port 9 locally.
    let client = ApiClient::new(Url::parse("http://127.0.0.1:9/api").unwrap());
    let args = cli("http://127.0.0.1:9/api", &["universities", "get"]);
    let request = prepare_request(&args).unwrap();
    assert!(execute(&client, &request).await.is_err());
}
