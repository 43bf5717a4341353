//! Course catalog endpoints: courses plus their shifts and modalities.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use enroll_registry::{
    Course, CourseDraft, CourseModality, CourseModalityDraft, CourseShift, CourseShiftDraft,
    RecordId,
};

use crate::error::ApiError;
use crate::routes::decode;
use crate::AppState;

// Courses

pub async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.registry.list_courses())
}

pub async fn get_course(
    Path(id): Path<RecordId>,
    State(state): State<AppState>,
) -> Result<Json<Course>, ApiError> {
    Ok(Json(state.registry.course(id)?))
}

pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    let draft: CourseDraft = decode(payload)?;
    Ok((StatusCode::CREATED, Json(state.registry.create_course(draft))))
}

pub async fn update_course(
    Path(id): Path<RecordId>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Course>, ApiError> {
    let draft: CourseDraft = decode(payload)?;
    Ok(Json(state.registry.update_course(id, draft)?))
}

pub async fn delete_course(
    Path(id): Path<RecordId>,
    State(state): State<AppState>,
) -> StatusCode {
    state.registry.delete_course(id);
    StatusCode::NO_CONTENT
}

// Shifts

pub async fn list_shifts(
    Path(course_id): Path<RecordId>,
    State(state): State<AppState>,
) -> Json<Vec<CourseShift>> {
    Json(state.registry.shifts_for_course(course_id))
}

pub async fn create_shift(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<CourseShift>), ApiError> {
    let draft: CourseShiftDraft = decode(payload)?;
    Ok((StatusCode::CREATED, Json(state.registry.create_shift(draft))))
}

pub async fn update_shift(
    Path(id): Path<RecordId>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<CourseShift>, ApiError> {
    let draft: CourseShiftDraft = decode(payload)?;
    Ok(Json(state.registry.update_shift(id, draft)?))
}

pub async fn delete_shift(
    Path(id): Path<RecordId>,
    State(state): State<AppState>,
) -> StatusCode {
    state.registry.delete_shift(id);
    StatusCode::NO_CONTENT
}

// Modalities

pub async fn list_modalities(
    Path(course_id): Path<RecordId>,
    State(state): State<AppState>,
) -> Json<Vec<CourseModality>> {
    Json(state.registry.modalities_for_course(course_id))
}

pub async fn create_modality(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<CourseModality>), ApiError> {
    let draft: CourseModalityDraft = decode(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(state.registry.create_modality(draft)),
    ))
}

pub async fn update_modality(
    Path(id): Path<RecordId>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<CourseModality>, ApiError> {
    let draft: CourseModalityDraft = decode(payload)?;
    Ok(Json(state.registry.update_modality(id, draft)?))
}

pub async fn delete_modality(
    Path(id): Path<RecordId>,
    State(state): State<AppState>,
) -> StatusCode {
    state.registry.delete_modality(id);
    StatusCode::NO_CONTENT
}
