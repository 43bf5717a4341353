//! Document upload endpoints. Files travel base64-encoded in JSON, as
//! the upload widget sends them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use enroll_registry::{DocumentDraft, RecordId, StoredDocument};

use crate::error::ApiError;
use crate::routes::decode;
use crate::AppState;

pub async fn create_document(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<StoredDocument>), ApiError> {
    let draft: DocumentDraft = decode(payload)?;
    Ok((StatusCode::CREATED, Json(state.registry.create_document(draft))))
}

pub async fn list_for_student(
    Path(student_id): Path<RecordId>,
    State(state): State<AppState>,
) -> Json<Vec<StoredDocument>> {
    Json(state.registry.documents_for_student(student_id))
}
