//! In-memory catalog implementation
//!
//! Mirrors the relational join in process: a method is visible through a type
//! only when the type, the method and a link between them are all registered.
//! The document is serialized with `serde_json`, so the output shape matches
//! the PostgreSQL aggregate byte for byte.

use async_trait::async_trait;
use tracing::debug;

use crate::{error::CatalogError, models::*, traits::*, CatalogResult};

/// Catalog held entirely in memory
///
/// Built once and then read concurrently; there is no interior mutability.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    types: Vec<String>,
    methods: Vec<Method>,
    /// (typeID, methodID) pairs in insertion order
    links: Vec<(String, String)>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observation type
    pub fn with_type(mut self, type_id: impl Into<String>) -> Self {
        let type_id = type_id.into();
        if !self.types.contains(&type_id) {
            self.types.push(type_id);
        }
        self
    }

    /// Register a method, replacing any existing method with the same methodID
    pub fn with_method(mut self, method: Method) -> Self {
        match self
            .methods
            .iter_mut()
            .find(|m| m.method_id == method.method_id)
        {
            Some(existing) => *existing = method,
            None => self.methods.push(method),
        }
        self
    }

    /// Associate a method with a type
    pub fn with_link(mut self, type_id: impl Into<String>, method_id: impl Into<String>) -> Self {
        let link = (type_id.into(), method_id.into());
        if !self.links.contains(&link) {
            self.links.push(link);
        }
        self
    }

    /// Whether the type is registered
    pub fn has_type(&self, type_id: &str) -> bool {
        self.types.iter().any(|t| t == type_id)
    }

    /// Join links against types and methods, optionally filtered by type
    fn join(&self, type_id: Option<&str>) -> Vec<Method> {
        self.links
            .iter()
            .filter(|(t, _)| type_id.map_or(true, |wanted| t == wanted))
            .filter(|(t, _)| self.has_type(t))
            .filter_map(|(_, m)| self.methods.iter().find(|method| &method.method_id == m))
            .cloned()
            .collect()
    }

    fn render(rows: Vec<Method>) -> CatalogResult<String> {
        serde_json::to_string(&MethodList::from_rows(rows)).map_err(CatalogError::from)
    }
}

#[async_trait]
impl TypeValidator for InMemoryCatalog {
    async fn valid_type(&self, type_id: &str) -> CatalogResult<()> {
        if self.has_type(type_id) {
            Ok(())
        } else {
            Err(CatalogError::unknown_type(type_id))
        }
    }
}

#[async_trait]
impl MethodStore for InMemoryCatalog {
    async fn all_methods(&self) -> CatalogResult<String> {
        let rows = self.join(None);
        debug!("In-memory join produced {} method rows", rows.len());
        Self::render(rows)
    }

    async fn methods_for_type(&self, type_id: &str) -> CatalogResult<String> {
        let rows = self.join(Some(type_id));
        debug!(
            "In-memory join produced {} method rows for type {}",
            rows.len(),
            type_id
        );
        Self::render(rows)
    }
}
