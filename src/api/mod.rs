//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod handlers;

/// Build the API router.
///
/// CORS is wide open; the browser frontend is served from a different
/// origin.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/calculate-route", post(handlers::calculate_route))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
