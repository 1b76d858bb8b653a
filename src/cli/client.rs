//! HTTP client for the registry API.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::cli::CliError;

/// A request ready to be sent: verb, path below the base URL, optional body.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: reqwest::Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Status and decoded body of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Full URL for a path such as `/universities/1`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Issue the request. Any status is a successful exchange; only transport
    /// and decoding failures are errors.
    pub async fn send(&self, request: &PreparedRequest) -> Result<ApiResponse, CliError> {
        let mut builder = self
            .client
            .request(request.method.clone(), self.url_for(&request.path));
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        Ok(ApiResponse {
            status,
            body: decode_body(&bytes),
        })
    }
}

/// Empty bodies become `null`; bodies that are not JSON are kept as a string.
pub fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
