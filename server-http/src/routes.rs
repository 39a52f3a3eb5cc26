use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build and configure the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/healthz", get(handlers::health_check))
        // Cache operation routes
        .route(
            "/cache",
            get(handlers::get_value)
                .post(handlers::set_value)
                .delete(handlers::delete_value),
        )
        .route("/flush", delete(handlers::flush))
        // Middleware
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
