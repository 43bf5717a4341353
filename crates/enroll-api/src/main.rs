//! Enrollment platform API backend.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use enroll_api::{build_router, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new();

    // First-run seeding: stock form configuration and course catalog.
    if state.engine.is_empty().await.unwrap() {
        state.engine.seed_defaults().await.unwrap();
    }
    if state.registry.courses_is_empty() {
        state.registry.seed_default_courses();
    }

    let app = build_router(state);

    let addr = std::env::var("ENROLL_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
    tracing::info!("enrollment API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
