//! Page-by-page accumulation over the backend's paginated endpoints.
//!
//! Every paginated endpoint answers with
//! `{"data": [...], "meta": {"paging": {"totalItems": N}}}` and accepts
//! 1-based `page` plus `pageSize` (at most 100). [`PagedFetcher`] requests
//! pages in order until its [`StopCondition`] is met.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::dto::PageEnvelope;
use super::headers::HeaderFactory;
use super::retry::RetryPolicy;
use crate::error::{Error, Result};
use crate::infrastructure::config::api::MAX_PAGE_SIZE;
use crate::port::{HttpRequest, HttpResponse, HttpTransport};

/// When to stop requesting further pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    /// Stop once `totalItems` records have been accumulated.
    TotalItems,
    /// Stop after this many pages, whatever the total.
    MaxPages(u32),
}

impl StopCondition {
    /// Whether the crawl is complete after `page` pages.
    ///
    /// An empty page always ends the crawl, guarding against totals that
    /// overstate what the backend will actually return.
    fn is_done(self, page: u32, page_len: usize, accumulated: usize, total: Option<u64>) -> bool {
        if page_len == 0 {
            return true;
        }
        match self {
            Self::TotalItems => total.map_or(true, |total| accumulated as u64 >= total),
            Self::MaxPages(max) => page >= max,
        }
    }
}

/// Issues GETs through a transport and accumulates paginated results.
///
/// Each request gets freshly generated headers. Non-2xx responses fail with
/// [`Error::Upstream`]; no partial results are returned on failure.
pub struct PagedFetcher {
    transport: Arc<dyn HttpTransport>,
    headers: HeaderFactory,
    retry: RetryPolicy,
    page_size: u32,
    shutdown: Option<watch::Receiver<bool>>,
}

impl PagedFetcher {
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, headers: HeaderFactory) -> Self {
        Self {
            transport,
            headers,
            retry: RetryPolicy::none(),
            page_size: MAX_PAGE_SIZE,
            shutdown: None,
        }
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Page size, clamped to `1..=100`.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Abort crawls between pages once `shutdown` flips to `true`.
    #[must_use]
    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.shutdown {
            Some(shutdown) if *shutdown.borrow() => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }

    async fn send(&self, path: &str, params: &[(String, String)]) -> Result<HttpResponse> {
        let max_attempts = self.retry.max_attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            let request = HttpRequest {
                path: path.to_string(),
                query: params.to_vec(),
                headers: self.headers.headers(),
            };

            let err = match self.transport.get(&request).await {
                Ok(response) if response.is_success() => return Ok(response),
                Ok(response) => Error::Upstream {
                    status: response.status,
                    path: path.to_string(),
                },
                Err(err) => err,
            };
            if attempt >= max_attempts || !self.retry.should_retry(&err) {
                return Err(err);
            }

            warn!(path, attempt, max_attempts, error = %err, "Request failed, retrying");
            let delay = self.retry.delay(attempt);
            if !delay.is_zero() {
                sleep(delay).await;
            }
            self.check_cancelled()?;
        }
    }

    /// Issue a GET and only check the status, discarding the body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Upstream`] on a non-2xx status or a transport error.
    pub async fn warm_up(&self, path: &str) -> Result<()> {
        self.check_cancelled()?;
        let response = self.send(path, &[]).await?;
        debug!(path, status = response.status, "Warm-up request succeeded");
        Ok(())
    }

    /// Single non-paginated GET returning the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or invalid JSON.
    pub async fn fetch_one(&self, path: &str, params: &[(String, String)]) -> Result<Value> {
        self.check_cancelled()?;
        let response = self.send(path, params).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Accumulate every page of `path` until `stop` is satisfied.
    ///
    /// `extra` is merged into each request after `page` and `pageSize`.
    ///
    /// # Errors
    ///
    /// Fails fast on the first transport error, non-2xx status, or
    /// malformed envelope. Returns [`Error::Cancelled`] if the shutdown
    /// signal fires between pages.
    pub async fn fetch_all(
        &self,
        path: &str,
        extra: &[(String, String)],
        stop: StopCondition,
    ) -> Result<Vec<Value>> {
        let mut records = Vec::new();
        let mut page: u32 = 1;
        if stop == StopCondition::MaxPages(0) {
            return Ok(records);
        }

        loop {
            self.check_cancelled()?;

            let mut params = vec![
                ("page".to_string(), page.to_string()),
                ("pageSize".to_string(), self.page_size.to_string()),
            ];
            params.extend_from_slice(extra);

            let response = self.send(path, &params).await?;
            let envelope: PageEnvelope =
                serde_json::from_str(&response.body).map_err(|e| Error::MalformedResponse {
                    path: path.to_string(),
                    reason: e.to_string(),
                })?;

            let total = envelope.total_items();
            if stop == StopCondition::TotalItems && total.is_none() {
                return Err(Error::MalformedResponse {
                    path: path.to_string(),
                    reason: "missing meta.paging.totalItems".into(),
                });
            }

            let page_len = envelope.data.len();
            records.extend(envelope.data);
            debug!(path, page, page_len, accumulated = records.len(), total, "Fetched page");

            if stop.is_done(page, page_len, records.len(), total) {
                break;
            }
            page += 1;
        }

        Ok(records)
    }
}
