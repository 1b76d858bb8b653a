//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::RegistryConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Names the optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "REGISTRY_CONFIG";
/// Overrides `listener.port`.
pub const PORT_VAR: &str = "PORT";
/// Overrides `database.url`.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {var}: '{value}'")]
    Env { var: &'static str, value: String },
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse configuration from TOML text without validating it.
pub fn parse_config(content: &str) -> Result<RegistryConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RegistryConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using the given variable lookup.
pub fn apply_env_overrides<F>(
    mut config: RegistryConfig,
    lookup: F,
) -> Result<RegistryConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup(PORT_VAR) {
        config.listener.port = port.trim().parse().map_err(|_| ConfigError::Env {
            var: PORT_VAR,
            value: port.clone(),
        })?;
    }
    if let Some(url) = lookup(DATABASE_URL_VAR) {
        config.database.url = url;
    }
    Ok(config)
}

/// Resolve the effective configuration for the service process.
///
/// Reads the file named by `REGISTRY_CONFIG` when set (defaults otherwise),
/// applies `PORT` / `DATABASE_URL`, then validates the result.
pub fn load_from_env() -> Result<RegistryConfig, ConfigError> {
    let lookup = |var: &str| std::env::var(var).ok().filter(|v| !v.is_empty());

    let base = match lookup(CONFIG_PATH_VAR) {
        Some(path) => load_config(Path::new(&path))?,
        None => RegistryConfig::default(),
    };

    let config = apply_env_overrides(base, lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
