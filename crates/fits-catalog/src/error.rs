//! Error types for the catalog layer

use thiserror::Error;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur during catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The requested typeID is not present in the catalog
    #[error("invalid typeID: {type_id}")]
    UnknownType { type_id: String },

    /// Database error (when database feature is enabled)
    #[cfg(feature = "postgres")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failed to produce the JSON document
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("Catalog error: {0}")]
    Other(String),
}

impl CatalogError {
    /// Create an unknown type error for the given identifier
    pub fn unknown_type(type_id: impl Into<String>) -> Self {
        CatalogError::UnknownType {
            type_id: type_id.into(),
        }
    }

    /// Whether this error means the caller asked for something that is not there,
    /// as opposed to the store failing.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, CatalogError::UnknownType { .. })
    }
}
