use axum::Json;
use serde_json::{Value, json};

/// GET /
pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to Sportz API!" }))
}
