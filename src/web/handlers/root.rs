//! Root informational endpoint

use axum::response::Json;
use serde_json::json;

pub async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "SSE Text Stream API - Use /sse?text=YourMessage to stream text character by character",
    }))
}
