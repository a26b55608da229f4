//! Agent base address

use std::fmt;

use crate::constants::DEFAULT_ENDPOINT;

/// Base address of the Browser Print agent
///
/// Always ends with a single `/`, so endpoint paths can be appended directly.
/// The address is not validated; a malformed URL only fails once a request is
/// sent.
///
/// # Examples
///
/// ```
/// use zbprint_core::Endpoint;
///
/// let endpoint = Endpoint::new("http://localhost:9100");
/// assert_eq!(endpoint.as_str(), "http://localhost:9100/");
/// assert_eq!(endpoint.join("available"), "http://localhost:9100/available");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    base: String,
}

impl Endpoint {
    pub fn new(address: impl Into<String>) -> Self {
        let mut base = address.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Full URL for an agent path
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}

impl From<&str> for Endpoint {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for Endpoint {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}
