//! Form-field configuration endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use enroll_forms::{DefinitionId, FieldDraft, FormFieldDefinition};

use crate::error::ApiError;
use crate::routes::decode;
use crate::AppState;

/// Public listing consumed by the renderer: every field, `(order, id)`
/// sorted. Filtering by section/active happens client-side against this
/// snapshot.
pub async fn list_fields(
    State(state): State<AppState>,
) -> Result<Json<Vec<FormFieldDefinition>>, ApiError> {
    Ok(Json(state.engine.list_fields().await?))
}

pub async fn create_field(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<FormFieldDefinition>), ApiError> {
    let draft: FieldDraft = decode(payload)?;
    let field = state.engine.create_field(draft).await?;
    Ok((StatusCode::CREATED, Json(field)))
}

pub async fn update_field(
    Path(id): Path<DefinitionId>,
    State(state): State<AppState>,
    Json(patch): Json<Value>,
) -> Result<Json<FormFieldDefinition>, ApiError> {
    Ok(Json(state.engine.update_field(id, patch).await?))
}

pub async fn delete_field(
    Path(id): Path<DefinitionId>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state.engine.delete_field(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Atomic reorder: the body is the full id list in its new display
/// order; every field gets a dense `1..=N` order value.
pub async fn set_field_order(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Vec<FormFieldDefinition>>, ApiError> {
    let sequence: Vec<DefinitionId> = decode(payload)?;
    Ok(Json(state.engine.set_field_sequence(&sequence).await?))
}
