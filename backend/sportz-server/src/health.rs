use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - component status and live connection count
pub async fn health(State(state): State<AppState>) -> Response {
    let running = state.realtime.is_running();

    let body = json!({
        "status": if running { "healthy" } else { "stopping" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "websocket": if running { "operational" } else { "stopped" },
            "store": "operational",
        },
        "connections": state.realtime.connection_count().await,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(body)).into_response()
}

/// GET /live - liveness check
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness check; not ready once the hub has stopped
pub async fn readiness(State(state): State<AppState>) -> Response {
    if state.realtime.is_running() {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Stopping").into_response()
    }
}
