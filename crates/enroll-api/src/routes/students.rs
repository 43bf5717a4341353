//! Student registration endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use enroll_forms::Section;
use enroll_registry::{RecordId, Student, StudentDraft};

use crate::error::ApiError;
use crate::routes::decode;
use crate::AppState;

/// A submission must answer every required active field of every
/// section, checked against the live configuration at submit time.
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let draft: StudentDraft = decode(payload)?;

    let mut missing = Vec::new();
    for section in [Section::Personal, Section::Contact, Section::Course] {
        missing.extend(state.engine.missing_required(section, &draft.values).await?);
    }
    if !missing.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    Ok((StatusCode::CREATED, Json(state.registry.create_student(draft))))
}

pub async fn list_students(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(state.registry.list_students())
}

pub async fn get_student(
    Path(id): Path<RecordId>,
    State(state): State<AppState>,
) -> Result<Json<Student>, ApiError> {
    Ok(Json(state.registry.student(id)?))
}

pub async fn update_student(
    Path(id): Path<RecordId>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Student>, ApiError> {
    let draft: StudentDraft = decode(payload)?;
    Ok(Json(state.registry.update_student(id, draft)?))
}
