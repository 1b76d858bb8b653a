use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    campus_registry::cli::run(std::env::args_os()).await
}
