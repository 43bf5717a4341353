//! Document-requirement configuration endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use enroll_forms::{DefinitionId, DocumentRequirementDefinition, RequirementDraft};

use crate::error::ApiError;
use crate::routes::decode;
use crate::AppState;

pub async fn list_requirements(
    State(state): State<AppState>,
) -> Result<Json<Vec<DocumentRequirementDefinition>>, ApiError> {
    Ok(Json(state.engine.list_requirements().await?))
}

pub async fn create_requirement(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<DocumentRequirementDefinition>), ApiError> {
    let draft: RequirementDraft = decode(payload)?;
    let requirement = state.engine.create_requirement(draft).await?;
    Ok((StatusCode::CREATED, Json(requirement)))
}

pub async fn update_requirement(
    Path(id): Path<DefinitionId>,
    State(state): State<AppState>,
    Json(patch): Json<Value>,
) -> Result<Json<DocumentRequirementDefinition>, ApiError> {
    Ok(Json(state.engine.update_requirement(id, patch).await?))
}

pub async fn delete_requirement(
    Path(id): Path<DefinitionId>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state.engine.delete_requirement(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_requirement_order(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Vec<DocumentRequirementDefinition>>, ApiError> {
    let sequence: Vec<DefinitionId> = decode(payload)?;
    Ok(Json(state.engine.set_requirement_sequence(&sequence).await?))
}
