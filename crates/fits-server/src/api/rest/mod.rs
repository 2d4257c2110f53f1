//! REST API implementation
//!
//! - types: Shared state and response types
//! - query: Method and query string validation
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: Unit tests for all components

mod handlers;
mod query;
mod router;
pub mod types;

// Re-export public API
pub use handlers::{method_list, METHOD_OPTIONAL_PARAMS};
pub use query::{check_query, QueryParams};
pub use router::create_router;
pub use types::{AppState, HealthResponse};
