//! HTTP REST API routes

pub mod session_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;
use crate::infrastructure::websocket;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        // Session routes
        .route("/api/sessions", post(session_routes::create_session))
        .route(
            "/api/sessions/{id}",
            get(session_routes::get_session).delete(session_routes::delete_session),
        )
        .route("/api/sessions/{id}/rounds", post(session_routes::next_round))
        .route("/api/sessions/{id}/answers", post(session_routes::submit_answer))
        .route("/api/sessions/{id}/reset", post(session_routes::reset_session))
        .route(
            "/api/sessions/{id}/reset-statistics",
            post(session_routes::reset_statistics),
        )
        // Event stream
        .route(
            "/api/sessions/{id}/events",
            get(websocket::session_events_handler),
        )
}

async fn health_check() -> &'static str {
    "OK"
}
