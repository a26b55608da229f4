//! Transport layer for the Browser Print agent
//!
//! Provides HTTP communication with the local agent.

pub mod error;
pub mod http;
pub mod message;

pub use error::{Error, Result};
pub use http::HttpTransport;
pub use message::{Blob, Body, Method, Request, Response};

use async_trait::async_trait;

/// Transport trait for different communication methods
///
/// Implementations send one request and return the raw response without
/// interpreting the status code; callers decide what counts as failure.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and wait for the full response
    async fn send(&self, request: Request) -> Result<Response>;
}
