//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional, named by REGISTRY_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (PORT, DATABASE_URL)
//!     → validation.rs (semantic checks)
//!     → RegistryConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow running with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::{
    DatabaseConfig, ListenerConfig, LogFormat, ObservabilityConfig, RegistryConfig,
    SecurityConfig,
};
