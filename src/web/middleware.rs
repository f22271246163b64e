use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS so browser `EventSource` clients can connect from any
/// origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
