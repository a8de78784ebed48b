//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Dashboard page
        .route("/", get(handlers::dashboard::dashboard))
        // JSON API
        .route("/api/forecast", get(handlers::forecast::forecast))
        .route("/api/cities", get(handlers::cities::list_cities))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .fallback(handlers::health::not_found)
        .with_state(state)
}
