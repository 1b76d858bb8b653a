//! `/api/students` handlers.
//!
//! Students can be created and read. There are no update or delete routes;
//! those verbs fall through to the 405 fallback.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::http::{non_empty, parse_id};
use crate::model::{Entity, EntityId, NewStudent, StudentWithUniversity};

const REQUIRED_FIELDS: &str =
    "Faculty number, first name, last name, and university ID are required";

/// Body of `POST /api/students`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub faculty_number: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub university_id: Option<EntityId>,
}

impl CreateStudentRequest {
    pub fn validate(self) -> Result<NewStudent, ApiError> {
        let missing = || ApiError::Validation(REQUIRED_FIELDS.into());

        Ok(NewStudent {
            faculty_number: non_empty(self.faculty_number).ok_or_else(missing)?,
            first_name: non_empty(self.first_name).ok_or_else(missing)?,
            middle_name: non_empty(self.middle_name),
            last_name: non_empty(self.last_name).ok_or_else(missing)?,
            university_id: self.university_id.ok_or_else(missing)?,
        })
    }
}

pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentWithUniversity>), ApiError> {
    let Json(payload) = payload?;
    let new = payload.validate()?;

    if !state.store.universities().exists(new.university_id).await? {
        return Err(ApiError::NotFound(Entity::University));
    }

    let created = state.store.students().create(new).await?;
    tracing::info!(
        student_id = created.student.id,
        university_id = created.university.id,
        "Student created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentWithUniversity>>, ApiError> {
    let students = state.store.students().get_all().await?;
    Ok(Json(students))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentWithUniversity>, ApiError> {
    let id = parse_id(&id, Entity::Student)?;
    let student = state.store.students().get_by_id(id).await?;
    Ok(Json(student))
}
