//! Environment-driven application configuration.

use crate::store::DatabaseConfig;

/// Default rows per page for the browse listing, matching the original
/// application's fixed page size.
pub const DEFAULT_PAGE_SIZE: i64 = 77;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub port: u16,
    pub page_size: i64,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to a local
    /// SQLite file and port 3000.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let page_size = std::env::var("PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|&n: &i64| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            database: DatabaseConfig::default(),
            port,
            page_size,
        }
    }
}
