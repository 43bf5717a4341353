//! Endpoint handlers, one module per resource.

pub mod chat;
pub mod courses;
pub mod documents;
pub mod form_fields;
pub mod health;
pub mod requirements;
pub mod students;

use serde_json::Value;

use crate::error::ApiError;

/// Decode a request body into a typed payload, reporting shape problems
/// as 400 rather than the extractor's default rejection.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(|e| ApiError::BadRequest(e.to_string()))
}
