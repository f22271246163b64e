use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // API endpoints
        .route("/", get(super::handlers::root::index))
        .route("/sse", get(super::handlers::stream::stream_text))
        // Health check
        .route("/health", get(super::handlers::health::health_check))
        .with_state(state)
}
