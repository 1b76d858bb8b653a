//! Fallback responses for requests no handler claims.
//!
//! Unknown paths and unsupported verbs still answer with the JSON error
//! shape, so clients never have to special-case plain-text bodies.

use crate::http::error::ApiError;

/// No route matches the path.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// The path exists but not for this verb (e.g. `PUT /api/students/1`).
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
