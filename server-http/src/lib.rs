pub mod api;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod validation;

// Re-export key types
pub use routes::build_router;
pub use state::AppState;
