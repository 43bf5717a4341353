//! HTTP boundary for the enrollment platform.
//!
//! Public routes serve the student-facing renderer (configuration
//! snapshots, registration, uploads, chat, course catalog); everything
//! under `/api/admin` is gated by the bearer-token admin middleware
//! before a handler runs.

pub mod auth;
pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use enroll_forms::FormEngine;
use enroll_registry::EnrollmentStore;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<FormEngine>,
    pub registry: Arc<EnrollmentStore>,
}

impl AppState {
    /// Fresh state over in-memory backends. Unseeded; the bootstrap
    /// decides whether to install defaults.
    pub fn new() -> Self {
        Self {
            engine: Arc::new(FormEngine::in_memory()),
            registry: Arc::new(EnrollmentStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api", public_routes())
        .nest("/api/admin", admin_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        // Form configuration (read-only snapshots)
        .route("/form-fields", get(routes::form_fields::list_fields))
        .route(
            "/document-requirements",
            get(routes::requirements::list_requirements),
        )
        // Students
        .route(
            "/students",
            get(routes::students::list_students).post(routes::students::create_student),
        )
        .route(
            "/students/:id",
            get(routes::students::get_student).put(routes::students::update_student),
        )
        .route(
            "/students/:id/documents",
            get(routes::documents::list_for_student),
        )
        .route(
            "/students/:id/chat-messages",
            get(routes::chat::list_for_student),
        )
        // Uploads and chat
        .route("/documents", post(routes::documents::create_document))
        .route("/chat-messages", post(routes::chat::create_message))
        // Course catalog
        .route("/courses", get(routes::courses::list_courses))
        .route("/courses/:id", get(routes::courses::get_course))
        .route("/courses/:id/shifts", get(routes::courses::list_shifts))
        .route(
            "/courses/:id/modalities",
            get(routes::courses::list_modalities),
        )
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/form-fields", post(routes::form_fields::create_field))
        .route("/form-fields/order", put(routes::form_fields::set_field_order))
        .route(
            "/form-fields/:id",
            put(routes::form_fields::update_field).delete(routes::form_fields::delete_field),
        )
        .route(
            "/document-requirements",
            post(routes::requirements::create_requirement),
        )
        .route(
            "/document-requirements/order",
            put(routes::requirements::set_requirement_order),
        )
        .route(
            "/document-requirements/:id",
            put(routes::requirements::update_requirement)
                .delete(routes::requirements::delete_requirement),
        )
        .route("/courses", post(routes::courses::create_course))
        .route(
            "/courses/:id",
            put(routes::courses::update_course).delete(routes::courses::delete_course),
        )
        .route("/course-shifts", post(routes::courses::create_shift))
        .route(
            "/course-shifts/:id",
            put(routes::courses::update_shift).delete(routes::courses::delete_shift),
        )
        .route("/course-modalities", post(routes::courses::create_modality))
        .route(
            "/course-modalities/:id",
            put(routes::courses::update_modality).delete(routes::courses::delete_modality),
        )
        .route_layer(axum::middleware::from_fn(middleware::require_admin))
}
