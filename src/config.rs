//! Client configuration
//!
//! Endpoints, paging, and transport settings used by [`BlockDb`](crate::BlockDb).

use crate::catalog::Catalog;
use std::collections::HashMap;
use std::time::Duration;

/// Configuration for a blockchain-db client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the blockchain database service
    pub bdb_base_url: String,

    /// Base URL for the platform API (Ethereum proxy endpoints)
    pub api_base_url: String,

    /// Number of block heights covered by one transaction page request
    pub page_step: u64,

    /// Request timeout
    pub timeout: Duration,

    /// Headers applied to every request
    pub default_headers: HashMap<String, String>,

    /// User agent string
    pub user_agent: String,

    /// Built-in currency and blockchain definitions used as defaults
    pub catalog: Catalog,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            bdb_base_url: default_bdb_base_url(),
            api_base_url: default_api_base_url(),
            page_step: default_page_step(),
            timeout: Duration::from_secs(default_timeout()),
            default_headers: HashMap::new(),
            user_agent: default_user_agent(),
            catalog: Catalog::defaults(),
        }
    }
}

fn default_bdb_base_url() -> String {
    "http://blockchain-db.us-east-1.elasticbeanstalk.com".to_string()
}

fn default_api_base_url() -> String {
    "https://api.breadwallet.com".to_string()
}

fn default_page_step() -> u64 {
    5_000
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("blockdb-client/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a configuration with default endpoints
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the blockchain database base URL
    pub fn with_bdb_base_url(mut self, url: impl Into<String>) -> Self {
        self.bdb_base_url = url.into();
        self
    }

    /// Override the platform API base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the height span requested per transaction page
    pub fn with_page_step(mut self, step: u64) -> Self {
        self.page_step = step;
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the user agent string
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Replace the built-in catalog
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(
            config.bdb_base_url,
            "http://blockchain-db.us-east-1.elasticbeanstalk.com"
        );
        assert_eq!(config.api_base_url, "https://api.breadwallet.com");
        assert_eq!(config.page_step, 5_000);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.catalog.blockchains.is_empty());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new()
            .with_bdb_base_url("http://localhost:8080")
            .with_page_step(100)
            .with_header("authorization", "Bearer token");

        assert_eq!(config.bdb_base_url, "http://localhost:8080");
        assert_eq!(config.page_step, 100);
        assert_eq!(
            config.default_headers.get("authorization"),
            Some(&"Bearer token".to_string())
        );
    }
}
