//! Command-line client for the registry API.
//!
//! `registry-cli <endpoint> <method> [id]` builds the request path, attaches a
//! canned payload for `post`/`put`, sends it, and prints the exchange. The
//! client knows only the HTTP contract; whatever status the server returns is
//! printed unchanged.
//!
//! Exit codes: 0 after any completed exchange or `--help`; 1 with no
//! arguments, on invalid arguments, and on transport failures.

pub mod args;
pub mod client;
pub mod payload;
pub mod render;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use thiserror::Error;

use self::args::Cli;
use self::client::{ApiClient, PreparedRequest};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("id is required for {0} method")]
    MissingId(&'static str),

    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Turn parsed arguments into a request without touching the network.
pub fn prepare_request(cli: &Cli) -> Result<PreparedRequest, CliError> {
    let id = cli.id.as_deref().map(str::trim).filter(|id| !id.is_empty());
    if cli.method.requires_id() && id.is_none() {
        return Err(CliError::MissingId(cli.method.as_str()));
    }

    let mut path = cli.endpoint.path().to_string();
    if let Some(id) = id {
        path.push('/');
        path.push_str(id);
    }

    let body = cli
        .method
        .sends_body()
        .then(|| payload::example_payload(cli.endpoint));

    Ok(PreparedRequest {
        method: cli.method.into(),
        path,
        body,
    })
}

/// Send a prepared request and render the exchange.
pub async fn execute(client: &ApiClient, request: &PreparedRequest) -> Result<String, CliError> {
    tracing::debug!(method = %request.method, path = %request.path, "Sending request");
    let response = client.send(request).await?;
    Ok(render::format_exchange(
        request.method.as_str(),
        &request.path,
        &response,
    ))
}

/// Exit status for an argument error: help requested explicitly is a success.
pub fn parse_error_status(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Entry point shared by the binary and tests.
pub async fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_error_status(err.kind()));
        }
    };

    let request = match prepare_request(&cli) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = ApiClient::new(cli.url.clone());
    match execute(&client, &request).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
