use axum::response::Json;

use crate::models::StatusResponse;

// GET /api/health - Liveness check
pub async fn health_check() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}
