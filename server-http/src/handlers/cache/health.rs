use axum::Json;

use crate::api::HealthResponse;

/// GET /healthz
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "OK".into(),
    })
}
