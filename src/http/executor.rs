//! Request executor
//!
//! The transport seam: one HTTP round trip in, exactly one asynchronous
//! completion out. Everything above this trait — pagination, decoding,
//! aggregation — is transport-agnostic, and tests substitute scripted
//! executors.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::types::{JsonValue, Method};

/// Completed round trip: status code and raw body bytes. Transport-level
/// failures surface as `QueryError::Submission` instead.
#[derive(Debug, Clone)]
pub struct ExecutorResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs one HTTP round trip per call, delivering exactly one completion.
///
/// No retry, no throttling, no timeout beyond the transport's own: a
/// non-responding call stalls its fetch until the transport gives up.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Execute a single request.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: &[(String, String)],
        body: Option<&JsonValue>,
    ) -> Result<ExecutorResponse>;
}

/// Configuration for the reqwest-backed executor
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Headers applied to every request
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HashMap::from([
                ("accept".to_string(), "application/json".to_string()),
                ("content-type".to_string(), "application/json".to_string()),
            ]),
            user_agent: format!("blockdb-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Default [`RequestExecutor`] over a shared reqwest client.
pub struct HttpExecutor {
    client: reqwest::Client,
    config: ExecutorConfig,
}

impl HttpExecutor {
    /// Create an executor with default configuration
    pub fn new() -> Self {
        Self::with_config(ExecutorConfig::default())
    }

    /// Create an executor with custom configuration
    pub fn with_config(config: ExecutorConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("failed to build http client");

        Self { client, config }
    }
}

impl Default for HttpExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: &[(String, String)],
        body: Option<&JsonValue>,
    ) -> Result<ExecutorResponse> {
        debug!(%method, %url, "executing request");

        let mut req = self.client.request(method.into(), url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        for (key, value) in headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(ExecutorResponse { status, body })
    }
}

impl std::fmt::Debug for HttpExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpExecutor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
