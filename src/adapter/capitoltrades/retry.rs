//! Retry policy for upstream requests.

use std::time::Duration;

use crate::error::Error;
use crate::infrastructure::config::ApiConfig;

/// Statuses worth retrying when retries are enabled.
pub const DEFAULT_RETRYABLE_STATUSES: &[u16] = &[429, 500, 502, 503, 504];

/// How many times to attempt a request and which failures warrant another try.
///
/// The default makes a single attempt. Backoff grows linearly with the
/// attempt number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
    retryable_statuses: Vec<u16>,
}

impl RetryPolicy {
    /// Single attempt, no retries.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
            retryable_statuses: Vec::new(),
        }
    }

    #[must_use]
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
            retryable_statuses: DEFAULT_RETRYABLE_STATUSES.to_vec(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        if config.retry_max_attempts <= 1 {
            return Self::none();
        }
        Self::new(config.retry_max_attempts, config.retry_backoff())
    }

    #[must_use]
    pub fn with_statuses(mut self, statuses: &[u16]) -> Self {
        self.retryable_statuses = statuses.to_vec();
        self
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// True when `err` is transient and another attempt may succeed.
    #[must_use]
    pub fn should_retry(&self, err: &Error) -> bool {
        match err {
            Error::Upstream { status, .. } => self.retryable_statuses.contains(status),
            Error::Http(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }

    /// Delay before attempt `attempt + 1`.
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}
