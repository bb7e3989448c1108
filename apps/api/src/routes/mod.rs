pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::transform::handlers;

/// Assembles the full router: the two transform endpoints, the health probe,
/// and the static form UI served for everything else.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/rewrite", post(handlers::handle_rewrite))
        .route("/api/generate", post(handlers::handle_generate))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}
