//! Onboarding chat transcript endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use enroll_registry::{ChatMessage, ChatMessageDraft, RecordId};

use crate::error::ApiError;
use crate::routes::decode;
use crate::AppState;

pub async fn create_message(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<ChatMessage>), ApiError> {
    let draft: ChatMessageDraft = decode(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(state.registry.create_chat_message(draft)),
    ))
}

pub async fn list_for_student(
    Path(student_id): Path<RecordId>,
    State(state): State<AppState>,
) -> Json<Vec<ChatMessage>> {
    Json(state.registry.chat_for_student(student_id))
}
