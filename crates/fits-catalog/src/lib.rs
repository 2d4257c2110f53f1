//! Method catalog for the FITS observation API
//!
//! This crate provides the storage side of the method lookup: validating
//! observation type identifiers and producing the `{"method": ...}` JSON
//! document, either from PostgreSQL or from an in-memory catalog.
//!
//! # Features
//!
//! - **PostgreSQL Catalog**: the database joins `fits.type`, `fits.type_method`
//!   and `fits.method` and aggregates the result to JSON (feature `postgres`)
//! - **In-Memory Catalog**: the same join and document shape, in process
//! - **Async API**: capability traits usable behind `Arc<dyn Catalog>`
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "postgres")]
//! use fits_catalog::{MethodStore, PostgresCatalog, TypeValidator};
//!
//! # #[cfg(feature = "postgres")]
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let catalog = PostgresCatalog::new("postgresql://localhost/fits").await?;
//!
//!     catalog.valid_type("e").await?;
//!     let body = catalog.methods_for_type("e").await?;
//!     println!("{}", body);
//!
//!     Ok(())
//! }
//! # #[cfg(not(feature = "postgres"))]
//! # fn main() {}
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod traits;

#[cfg(feature = "postgres")]
pub mod postgres;

// Re-exports - Error
pub use error::{CatalogError, CatalogResult};

// Re-exports - Catalogs
pub use memory::InMemoryCatalog;
pub use models::*;
pub use traits::*;

#[cfg(feature = "postgres")]
pub use postgres::PostgresCatalog;
