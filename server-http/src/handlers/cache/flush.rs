use crate::api::CacheResponse;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use tracing::{error, info};

/// DELETE /flush
pub async fn flush(
    State(state): State<AppState>,
) -> Result<Json<CacheResponse>, (StatusCode, Json<CacheResponse>)> {
    match state.engine.flush() {
        Ok(()) => {
            info!("FLUSH: cache and backing file emptied");
            Ok(Json(CacheResponse::ok()))
        }
        Err(e) => {
            // Memory is already cleared; the next scheduled save rewrites the file
            error!("Failed to truncate backing file: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CacheResponse::error(e.to_string())),
            ))
        }
    }
}
