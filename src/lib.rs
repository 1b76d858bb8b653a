//! Campus Registry Library
//!
//! Universities and the students enrolled at them, served as JSON over HTTP
//! and backed by SQLite.

pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;
pub mod repository;
pub mod store;

pub use config::schema::RegistryConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::Store;
