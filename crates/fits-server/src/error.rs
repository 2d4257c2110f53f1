//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fits_catalog::CatalogError;
use serde_json::json;
use std::fmt;

/// Server error type
#[derive(Debug)]
pub enum ServerError {
    /// HTTP method not accepted by the endpoint
    MethodNotAllowed(String),

    /// Invalid request (bad or missing query parameters)
    InvalidRequest(String),

    /// Not found
    NotFound(String),

    /// Internal server error
    InternalError(String),
}

impl ServerError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the request was rejected before any store access
    pub fn is_malformed_request(&self) -> bool {
        matches!(
            self,
            ServerError::MethodNotAllowed(_) | ServerError::InvalidRequest(_)
        )
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::MethodNotAllowed(msg) => write!(f, "Method not allowed: {}", msg),
            ServerError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ServerError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ServerError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ServerError::MethodNotAllowed(msg)
            | ServerError::InvalidRequest(msg)
            | ServerError::NotFound(msg)
            | ServerError::InternalError(msg) => msg,
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<CatalogError> for ServerError {
    fn from(err: CatalogError) -> Self {
        if err.is_unknown_type() {
            ServerError::NotFound(err.to_string())
        } else {
            ServerError::InternalError(err.to_string())
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
