//! Composition root: configuration to a seeded [`DisclosureClient`].

use tokio::sync::watch;
use tracing::{info, warn};

use crate::adapter::capitoltrades::{DisclosureClient, ProxyPool};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Build the proxy pool when the config names any proxy ports.
#[must_use]
pub fn build_proxy_pool(config: &Config) -> Option<ProxyPool> {
    config
        .proxy
        .is_enabled()
        .then(|| ProxyPool::from_config(&config.proxy))
}

/// Initialize a client from `config`.
///
/// Goes through a proxy from `pool` when one is given, otherwise connects
/// directly.
///
/// # Errors
///
/// Returns [`Error::PoolExhausted`](crate::error::Error::PoolExhausted) when
/// the pool is empty, or
/// [`Error::Initialization`](crate::error::Error::Initialization) when the
/// warm-up or seed crawl fails.
pub async fn connect(
    config: &Config,
    pool: Option<&ProxyPool>,
    shutdown: watch::Receiver<bool>,
) -> Result<DisclosureClient> {
    let builder = DisclosureClient::builder(config.api.clone()).shutdown(shutdown);

    let client = match pool {
        Some(pool) => {
            info!(available = pool.remaining(), "Connecting through proxy pool");
            builder.initialize(pool).await?
        }
        None => {
            warn!("No proxy ports configured, connecting directly");
            builder.initialize_direct().await?
        }
    };
    Ok(client)
}
