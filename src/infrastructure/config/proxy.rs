//! Outbound proxy settings.

use serde::Deserialize;

use crate::error::ConfigError;

pub const PROXY_USERNAME_ENV: &str = "CAPITOLTRADES_PROXY_USERNAME";
pub const PROXY_PASSWORD_ENV: &str = "CAPITOLTRADES_PROXY_PASSWORD";

/// Proxy egress endpoints. One identity is built per configured port.
///
/// Credentials are loaded from `CAPITOLTRADES_PROXY_USERNAME` and
/// `CAPITOLTRADES_PROXY_PASSWORD` at runtime (never from the config file).
/// No ports means requests go out directly.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub ports: Vec<u16>,
    #[serde(skip)]
    pub username: Option<String>,
    #[serde(skip)]
    pub password: Option<String>,
}

fn default_scheme() -> String {
    "http".into()
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: String::new(),
            ports: Vec::new(),
            username: None,
            password: None,
        }
    }
}

impl ProxyConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.ports.is_empty()
    }

    pub(crate) fn load_credentials(&mut self) {
        self.username = std::env::var(PROXY_USERNAME_ENV).ok();
        self.password = std::env::var(PROXY_PASSWORD_ENV).ok();
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_enabled() {
            return Ok(());
        }
        if self.host.is_empty() {
            return Err(ConfigError::MissingField { field: "proxy.host" });
        }
        if !matches!(self.scheme.as_str(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "proxy.scheme",
                reason: format!("unsupported scheme '{}'", self.scheme),
            });
        }
        if self.ports.contains(&0) {
            return Err(ConfigError::InvalidValue {
                field: "proxy.ports",
                reason: "port 0 is not a valid egress port".into(),
            });
        }
        if self.password.is_some() && self.username.is_none() {
            return Err(ConfigError::MissingField {
                field: PROXY_USERNAME_ENV,
            });
        }
        Ok(())
    }
}
