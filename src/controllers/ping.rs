use axum::{response::IntoResponse, Json};
use serde_json::json;

/// GET /ping - Liveness check
pub async fn ping() -> impl IntoResponse {
    Json(json!({ "pong": "hello from CultuLa API!" }))
}
