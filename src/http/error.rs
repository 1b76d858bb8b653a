//! Mapping of failures onto JSON error responses.
//!
//! Every error leaves the service as `{"error": "<message>"}` with the status
//! code of its variant.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::model::Entity;
use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(Entity),

    #[error("{0}")]
    Conflict(String),

    #[error("Not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Unavailable(String),

    /// Unclassified store failure; the message is passed through verbatim.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(entity) => ApiError::NotFound(entity),
            // Only student inserts carry a foreign key.
            RepositoryError::ForeignKey(_) => ApiError::NotFound(Entity::University),
            RepositoryError::HasDependents(_) => {
                ApiError::Conflict("Cannot delete a university with enrolled students".into())
            }
            RepositoryError::DuplicateKey(message) => ApiError::Internal(message),
            RepositoryError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_mapping() {
        let cases = [
            (
                RepositoryError::NotFound(Entity::Student),
                StatusCode::NOT_FOUND,
                "Student not found",
            ),
            (
                RepositoryError::ForeignKey("FOREIGN KEY constraint failed".into()),
                StatusCode::NOT_FOUND,
                "University not found",
            ),
            (
                RepositoryError::DuplicateKey(
                    "UNIQUE constraint failed: students.faculty_number".into(),
                ),
                StatusCode::INTERNAL_SERVER_ERROR,
                "UNIQUE constraint failed: students.faculty_number",
            ),
            (
                RepositoryError::HasDependents(3),
                StatusCode::CONFLICT,
                "Cannot delete a university with enrolled students",
            ),
        ];

        for (repo_err, status, message) in cases {
            let api_err = ApiError::from(repo_err);
            assert_eq!(api_err.status(), status);
            assert_eq!(api_err.to_string(), message);
        }
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::NotFound(Entity::University).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "University not found"}));
    }
}
