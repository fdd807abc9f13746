//! Error types for the BlockChain DB client
//!
//! All public APIs return `Result<T, QueryError>`. Transport failures and
//! decode failures flow through the same taxonomy so callers handle both
//! uniformly. Nothing in this layer retries automatically.

use thiserror::Error;

/// Boxed transport cause carried by [`QueryError::Submission`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for every query against the BlockChain DB or the legacy
/// API services.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The request URL could not be built from the configured base and path.
    #[error("url build failed: {0}")]
    UrlBuild(String),

    /// The HTTP round trip failed, or completed with a non-200 status.
    #[error("submission failed: {0}")]
    Submission(#[source] BoxError),

    /// The round trip succeeded but the response carried no body.
    #[error("response carried no data")]
    NoData,

    /// The response body was not valid JSON.
    #[error("json parse failed: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The JSON parsed but could not be converted into a domain record.
    #[error("model decode failed: {0}")]
    Model(String),

    /// An entity was requested by id but the backend returned no match.
    #[error("no entity for id {id:?}")]
    NoEntity {
        /// The originally requested id, when one was supplied.
        id: Option<String>,
    },
}

/// A completed round trip with a status other than 200, reported as the
/// cause of a [`QueryError::Submission`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unexpected http status {0}")]
pub struct UnexpectedStatus(pub u16);

impl QueryError {
    /// Create a url-build error
    pub fn url_build(message: impl Into<String>) -> Self {
        Self::UrlBuild(message.into())
    }

    /// Create a submission error from any transport cause
    pub fn submission(cause: impl Into<BoxError>) -> Self {
        Self::Submission(cause.into())
    }

    /// Create a submission error for a non-200 status
    pub fn status(code: u16) -> Self {
        Self::Submission(Box::new(UnexpectedStatus(code)))
    }

    /// Create a model decode error
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model(message.into())
    }

    /// Create a no-entity error carrying the requested id
    pub fn no_entity(id: impl Into<String>) -> Self {
        Self::NoEntity {
            id: Some(id.into()),
        }
    }

    /// Check whether this error reports a missing entity
    pub fn is_no_entity(&self) -> bool {
        matches!(self, Self::NoEntity { .. })
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(cause: reqwest::Error) -> Self {
        Self::Submission(Box::new(cause))
    }
}

/// Result type alias for the BlockChain DB client
pub type Result<T> = std::result::Result<T, QueryError>;
