//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request id, trace, cors, body limit)
//!     → universities.rs / students.rs / index.rs (validate, call repository)
//!     → error.rs (map failures to status + {"error": ...})
//!     → response.rs (JSON fallbacks for unknown paths and verbs)
//!     → Send to client
//! ```

pub mod error;
pub mod index;
pub mod request;
pub mod response;
pub mod server;
pub mod students;
pub mod universities;

pub use error::ApiError;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};

use crate::model::{Entity, EntityId};

/// Parse a path identifier. Anything that is not an integer cannot name a
/// stored row, so it is reported as the entity being absent.
pub(crate) fn parse_id(raw: &str, entity: Entity) -> Result<EntityId, ApiError> {
    raw.trim()
        .parse::<EntityId>()
        .map_err(|_| ApiError::NotFound(entity))
}

/// Treat empty strings as absent. Whitespace counts as a value.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
