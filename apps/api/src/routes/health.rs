use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Fixed status object; does not probe the model runtime.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
