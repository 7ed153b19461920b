use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Transcript submission
        .route("/save_transcript", post(handlers::save_transcript))
        // Topic catalog
        .route("/topics", get(handlers::list_topics))
        .route("/topics/:name", get(handlers::get_topic))
        // Browser capture pages POST from a different origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
