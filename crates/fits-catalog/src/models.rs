//! Data models for the method catalog

use serde::{Deserialize, Serialize};

/// Content type of every successful catalog response
pub const METHOD_CONTENT_TYPE: &str = "application/json;version=1";

/// A measurement technique as exposed to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// External identifier, unique across the catalog
    #[serde(rename = "methodID")]
    pub method_id: String,
    pub name: String,
    pub description: String,
    pub reference: String,
}

impl Method {
    /// Create a new method
    pub fn new(
        method_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            method_id: method_id.into(),
            name: name.into(),
            description: description.into(),
            reference: reference.into(),
        }
    }
}

/// The document returned by the method lookup
///
/// `method` is `None` (serialized as `null`) when the join produced no rows,
/// never an empty array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodList {
    pub method: Option<Vec<Method>>,
}

impl MethodList {
    /// Build a document from joined rows
    pub fn from_rows(rows: Vec<Method>) -> Self {
        if rows.is_empty() {
            Self { method: None }
        } else {
            Self { method: Some(rows) }
        }
    }

    /// Number of methods in the document
    pub fn len(&self) -> usize {
        self.method.as_ref().map_or(0, Vec::len)
    }

    /// Whether the document carries no methods
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
