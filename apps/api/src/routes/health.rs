use axum::Json;
use serde_json::{json, Value};

/// GET /health, GET /api/test
/// Liveness probe with a fixed acknowledgment.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "message": "API is working" }))
}
