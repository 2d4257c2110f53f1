//! Router creation and configuration
//!
//! Creates Axum routers for REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{any, get},
    Router,
};
use fits_catalog::Catalog;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
///
/// `/method` accepts every HTTP method so that method checking happens in
/// the handler and produces the same error body as a bad query string.
pub fn create_router(catalog: Arc<dyn Catalog>) -> Router {
    let state = AppState::new(catalog);

    Router::new()
        .route("/health", get(health))
        .route("/method", any(method))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
