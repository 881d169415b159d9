use crate::{AppState, health};
use crate::{
    create_commentary, create_match, get_match, list_commentary, list_matches, update_score,
    welcome,
};

use axum::{
    Router,
    routing::{get, patch},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        // Matches
        .route("/matches", get(list_matches).post(create_match))
        .route("/matches/{id}", get(get_match))
        .route("/matches/{id}/score", patch(update_score))
        .route(
            "/matches/{id}/commentary",
            get(list_commentary).post(create_commentary),
        )
        // WebSocket endpoint
        .route("/ws", get(sportz_ws::handler))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
