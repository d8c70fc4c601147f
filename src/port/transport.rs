//! HTTP transport port.
//!
//! The paged fetcher talks to the upstream API only through
//! [`HttpTransport`], so pagination, retry and header logic can be
//! exercised against scripted responses.

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::error::Result;

/// A GET request relative to the transport's base URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Path beginning with `/`, e.g. `/trades`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
}

impl HttpRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
        }
    }

    /// Value of the first query parameter named `key`.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code and body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET against the upstream API.
///
/// Implementations return `Ok` for any HTTP status; mapping non-success
/// statuses to errors is left to the caller. `Err` is reserved for
/// transport failures (DNS, connect, timeout).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse>;
}
