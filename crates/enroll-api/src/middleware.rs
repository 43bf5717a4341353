//! Admin gate for `/api/admin/*`.
//!
//! Runs before any handler: no or invalid bearer token is 401, a valid
//! token without the administrator flag is 403. Handlers behind the
//! gate never see unauthorized requests.

use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::auth;
use crate::error::ApiError;

pub async fn require_admin(request: Request, next: Next) -> Response {
    let claims = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .and_then(|token| auth::verify_token(token).ok());

    match claims {
        None => ApiError::Unauthorized("authentication required".into()).into_response(),
        Some(claims) if !claims.is_admin => {
            ApiError::Forbidden("administrator access required".into()).into_response()
        }
        Some(_) => next.run(request).await,
    }
}
