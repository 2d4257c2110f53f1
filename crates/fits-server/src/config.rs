//! Server configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Server configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level, used when RUST_LOG is not set
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// PostgreSQL connection URL for the catalog
    /// If not set, DATABASE_URL is used instead
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections
    pub max_connections: u32,

    /// Seconds to wait for a free pooled connection
    pub acquire_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            database_url: None,
            max_connections: 10,
            acquire_timeout_secs: 5,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::build(config::File::with_name("config/server").required(false))
    }

    /// Load configuration from a specific file, then the environment
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Self::build(config::File::from(path.as_ref()).required(true))
    }

    fn build<S>(file: S) -> anyhow::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix("FITS").try_parsing(true))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Database URL from config, falling back to DATABASE_URL
    ///
    /// Empty values count as unset in both places.
    pub fn resolve_database_url(&self) -> Option<String> {
        pick_database_url(
            self.database_url.clone(),
            std::env::var("DATABASE_URL").ok(),
        )
    }

    /// Socket address string to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn pick_database_url(configured: Option<String>, env: Option<String>) -> Option<String> {
    configured
        .filter(|url| !url.is_empty())
        .or(env)
        .filter(|url| !url.is_empty())
}

/// Replace the password in a connection URL with `***`
///
/// `postgresql://fits_r:secret@db/fits` becomes `postgresql://fits_r:***@db/fits`.
/// URLs without credentials are returned as given.
pub fn redact_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let authority = scheme_end + 3;

    let Some(at) = url[authority..].rfind('@') else {
        return url.to_string();
    };
    let userinfo = &url[authority..authority + at];

    match userinfo.split_once(':') {
        Some((user, _)) => format!(
            "{}{}:***{}",
            &url[..authority],
            user,
            &url[authority + at..]
        ),
        None => url.to_string(),
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field(
                "database_url",
                &self.database_url.as_deref().map(redact_database_url),
            )
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}
