//! Capability traits consumed by the method lookup
//!
//! This module defines the seams between request handling and storage:
//!
//! - [`TypeValidator`]: checks that a typeID names a known observation type
//! - [`MethodStore`]: runs the method queries and returns the finished JSON text
//! - [`Catalog`]: both of the above, blanket-implemented
//!
//! # Examples
//!
//! ```no_run
//! use fits_catalog::{InMemoryCatalog, Method, MethodStore, TypeValidator};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let catalog = InMemoryCatalog::new()
//!     .with_type("e")
//!     .with_method(Method::new("bernese5", "Bernese v5.0", "Bernese v5.0 GNS processing software", "http://www.bernese.unibe.ch/"))
//!     .with_link("e", "bernese5");
//!
//! catalog.valid_type("e").await?;
//! let body = catalog.methods_for_type("e").await?;
//! assert!(body.starts_with(r#"{"method":["#));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::CatalogResult;

/// Checks observation type identifiers against the catalog
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait TypeValidator: Send + Sync {
    /// Succeeds when `type_id` is a known type
    ///
    /// # Errors
    /// [`CatalogError::UnknownType`](crate::CatalogError::UnknownType) when the
    /// type is not recognized; any other variant is a store failure.
    async fn valid_type(&self, type_id: &str) -> CatalogResult<()>;
}

/// Executes the method lookup queries
///
/// Both operations return a complete `{"method": [...] | null}` document as
/// JSON text. Callers write it to the response without re-parsing.
#[async_trait]
pub trait MethodStore: Send + Sync {
    /// Every method reachable through a type association
    async fn all_methods(&self) -> CatalogResult<String>;

    /// Methods associated with one type
    ///
    /// # Arguments
    /// * `type_id` - External type identifier, bound as a query parameter
    async fn methods_for_type(&self, type_id: &str) -> CatalogResult<String>;
}

/// A full catalog backend: type validation plus method lookup
pub trait Catalog: TypeValidator + MethodStore {}

impl<T: TypeValidator + MethodStore> Catalog for T {}
