//! REST API type definitions
//!
//! Shared state and response types for the REST API endpoints.

use fits_catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
///
/// The catalog is read-only, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
