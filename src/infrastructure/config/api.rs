//! Disclosure API client settings.

use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

/// Largest page the upstream API will return.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Settings for talking to the Capitol Trades backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Records requested per page (1..=100).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Page cap for the latest-trades crawl.
    #[serde(default = "default_latest_max_pages")]
    pub latest_max_pages: u32,
    /// Attempts per request, including the first. 1 disables retries.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds, multiplied by the attempt number.
    #[serde(default)]
    pub retry_backoff_ms: u64,
    /// Offset applied to every parsed disclosure date.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

fn default_base_url() -> String {
    "https://bff.capitoltrades.com".into()
}

const fn default_timeout_ms() -> u64 {
    5000
}

const fn default_connect_timeout_ms() -> u64 {
    2000
}

const fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}

const fn default_latest_max_pages() -> u32 {
    5
}

const fn default_retry_max_attempts() -> u32 {
    1
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            page_size: default_page_size(),
            latest_max_pages: default_latest_max_pages(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: 0,
            utc_offset_minutes: 0,
        }
    }
}

impl ApiConfig {
    /// API config pointed at a different backend, e.g. a local fixture server.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    #[must_use]
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    /// Target zone for parsed dates. Falls back to UTC when out of range.
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" });
        }
        Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: e.to_string(),
        })?;
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: format!("must be between 1 and {MAX_PAGE_SIZE}"),
            });
        }
        if self.latest_max_pages == 0 {
            return Err(ConfigError::InvalidValue {
                field: "latest_max_pages",
                reason: "must be greater than 0".into(),
            });
        }
        if self.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be at least 1".into(),
            });
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".into(),
            });
        }
        if FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60)).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "utc_offset_minutes",
                reason: "must be within +/- 24 hours".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_limits() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://bff.capitoltrades.com");
        assert_eq!(config.page_size, 100);
        assert_eq!(config.latest_max_pages, 5);
        assert_eq!(config.retry_max_attempts, 1);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_oversized_pages() {
        let config = ApiConfig {
            page_size: 101,
            ..ApiConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "page_size",
                ..
            })
        ));
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let config = ApiConfig::with_base_url("not a url");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "base_url",
                ..
            })
        ));
    }

    #[test]
    fn utc_offset_converts_minutes() {
        let config = ApiConfig {
            utc_offset_minutes: 120,
            ..ApiConfig::default()
        };
        assert_eq!(config.utc_offset().local_minus_utc(), 7200);
    }

    #[test]
    fn rejects_offsets_beyond_a_day() {
        let config = ApiConfig {
            utc_offset_minutes: 24 * 60,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
