//! Output formatting.

use serde_json::Value;

use crate::cli::client::ApiResponse;

const RULE_WIDTH: usize = 60;

/// Render one request/response exchange as a framed block.
pub fn format_exchange(method: &str, path: &str, response: &ApiResponse) -> String {
    let rule = "═".repeat(RULE_WIDTH);
    let body = pretty(&response.body);
    format!(
        "\n{rule}\n{method} {path}\n{rule}\nStatus: {status}\n\nResponse:\n{body}\n{rule}\n",
        status = response.status.as_u16(),
    )
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
