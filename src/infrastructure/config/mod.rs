//! Infrastructure configuration modules.

pub mod api;
pub mod logging;
pub mod proxy;
pub mod settings;

pub use api::ApiConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use proxy::ProxyConfig;
pub use settings::Config;
