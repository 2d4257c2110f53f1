//! Catalog initialization
//!
//! Turns server configuration into a connected PostgreSQL catalog.

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use fits_catalog::PostgresCatalog;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;

/// Connect the catalog's connection pool
///
/// Fails when neither the config nor DATABASE_URL provides a database URL,
/// or when the first connection cannot be established.
pub async fn init_catalog(config: &ServerConfig) -> Result<PostgresCatalog> {
    let database_url = config.resolve_database_url().ok_or_else(|| {
        anyhow::anyhow!(
            "Database URL not configured. Set FITS_DATABASE_URL, DATABASE_URL, \
            or database_url in config/server."
        )
    })?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&database_url)
        .await
        .context("Failed to connect to catalog database")?;

    info!(
        "Catalog pool ready (max_connections={})",
        config.max_connections
    );

    Ok(PostgresCatalog::with_pool(pool))
}
