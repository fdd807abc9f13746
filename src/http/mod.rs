//! HTTP transport collaborator
//!
//! One asynchronous round trip per call, behind the [`RequestExecutor`]
//! seam.

mod executor;

pub use executor::{ExecutorConfig, ExecutorResponse, HttpExecutor, RequestExecutor};

#[cfg(test)]
mod tests;
