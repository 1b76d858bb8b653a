//! Service directory and health.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// `GET /`: static list of endpoints.
pub async fn directory() -> Json<Value> {
    Json(json!({
        "message": "Student-University API Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "universities": {
                "POST /api/universities": "Create a new university",
                "GET /api/universities": "Get all universities",
                "GET /api/universities/:id": "Get a university by ID",
                "PUT /api/universities/:id": "Update a university",
                "DELETE /api/universities/:id": "Delete a university",
            },
            "students": {
                "POST /api/students": "Create a new student",
                "GET /api/students": "Get all students",
                "GET /api/students/:id": "Get a student by ID",
            },
        },
    }))
}

/// `GET /health`: 200 while the store answers.
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.store.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Store ping failed");
        ApiError::Unavailable(format!("Store unavailable: {e}"))
    })?;
    Ok(Json(json!({ "status": "ok" })))
}
