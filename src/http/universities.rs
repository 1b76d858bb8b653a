//! `/api/universities` handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::http::{non_empty, parse_id};
use crate::model::{Entity, NewUniversity, UniversityUpdate, UniversityWithStudents};

/// Body of `POST /api/universities`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUniversityRequest {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl CreateUniversityRequest {
    pub fn validate(self) -> Result<NewUniversity, ApiError> {
        match (non_empty(self.name), non_empty(self.location)) {
            (Some(name), Some(location)) => Ok(NewUniversity { name, location }),
            _ => Err(ApiError::Validation("Name and location are required".into())),
        }
    }
}

/// Body of `PUT /api/universities/:id`. Absent and empty fields are left alone.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUniversityRequest {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl From<UpdateUniversityRequest> for UniversityUpdate {
    fn from(request: UpdateUniversityRequest) -> Self {
        Self {
            name: non_empty(request.name),
            location: non_empty(request.location),
        }
    }
}

pub async fn create_university(
    State(state): State<AppState>,
    payload: Result<Json<CreateUniversityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UniversityWithStudents>), ApiError> {
    let Json(payload) = payload?;
    let new = payload.validate()?;

    let created = state.store.universities().create(new).await?;
    tracing::info!(university_id = created.university.id, "University created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_universities(
    State(state): State<AppState>,
) -> Result<Json<Vec<UniversityWithStudents>>, ApiError> {
    let universities = state.store.universities().get_all().await?;
    Ok(Json(universities))
}

pub async fn get_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UniversityWithStudents>, ApiError> {
    let id = parse_id(&id, Entity::University)?;
    let university = state.store.universities().get_by_id(id).await?;
    Ok(Json(university))
}

pub async fn update_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUniversityRequest>, JsonRejection>,
) -> Result<Json<UniversityWithStudents>, ApiError> {
    let id = parse_id(&id, Entity::University)?;
    let universities = state.store.universities();
    if !universities.exists(id).await? {
        return Err(ApiError::NotFound(Entity::University));
    }

    // A request without a JSON body changes nothing.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(JsonRejection::MissingJsonContentType(_)) => UpdateUniversityRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    let updated = universities.update(id, payload.into()).await?;
    tracing::info!(university_id = id, "University updated");
    Ok(Json(updated))
}

pub async fn delete_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, Entity::University)?;
    state.store.universities().delete(id).await?;
    tracing::info!(university_id = id, "University deleted");
    Ok(StatusCode::NO_CONTENT)
}
