//! Canonical test configurations.

use crate::infrastructure::config::{ApiConfig, ProxyConfig};

/// API config pointed at `base_url` with retries disabled.
pub fn api(base_url: &str) -> ApiConfig {
    ApiConfig {
        retry_max_attempts: 1,
        retry_backoff_ms: 0,
        ..ApiConfig::with_base_url(base_url)
    }
}

/// Proxy config with the given ports and fixed credentials.
pub fn proxy(ports: &[u16]) -> ProxyConfig {
    ProxyConfig {
        scheme: "http".into(),
        host: "proxy.test".into(),
        ports: ports.to_vec(),
        username: Some("user".into()),
        password: Some("secret".into()),
    }
}
