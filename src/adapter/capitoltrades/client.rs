//! Capitol Trades disclosure client.
//!
//! [`DisclosureClient`] owns one proxied session against
//! `bff.capitoltrades.com` and the politician directory seeded from it.
//! All calls on a client run sequentially over that session. Run several
//! clients, each with its own proxy identity, for parallel crawls.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::dto::{ObjectEnvelope, PageEnvelope};
use super::fetcher::{PagedFetcher, StopCondition};
use super::headers::HeaderFactory;
use super::normalize::RecordNormalizer;
use super::proxy::{ProxyIdentity, ProxyPool};
use super::retry::RetryPolicy;
use super::transport::ReqwestTransport;
use crate::domain::{
    Batch, Committee, CommitteeId, PoliticianDirectory, PoliticianId, Trade, TradeQuery,
};
use crate::error::{Error, Result};
use crate::infrastructure::config::ApiConfig;
use crate::port::HttpTransport;

pub const POLITICIANS_PATH: &str = "/politicians";
pub const TRADES_PATH: &str = "/trades";
pub const COMMITTEES_PATH: &str = "/committees";

/// Configures and initializes a [`DisclosureClient`].
pub struct DisclosureClientBuilder {
    config: ApiConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    shutdown: Option<watch::Receiver<bool>>,
}

impl DisclosureClientBuilder {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            transport: None,
            shutdown: None,
        }
    }

    /// Use `transport` instead of building a reqwest session.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Abort crawls (including the seed crawl) once `shutdown` flips to `true`.
    #[must_use]
    pub fn shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    /// Acquire a proxy identity from `pool`, then warm up and seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PoolExhausted`] when the pool is empty, or
    /// [`Error::Initialization`] when the warm-up or seed crawl fails.
    pub async fn initialize(self, pool: &ProxyPool) -> Result<DisclosureClient> {
        let proxy = pool.acquire()?;
        self.connect(Some(proxy)).await
    }

    /// Warm up and seed over a direct connection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Initialization`] when the warm-up or seed crawl fails.
    pub async fn initialize_direct(self) -> Result<DisclosureClient> {
        self.connect(None).await
    }

    async fn connect(self, proxy: Option<ProxyIdentity>) -> Result<DisclosureClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                ReqwestTransport::new(&self.config, proxy.as_ref()).map_err(Error::initialization)?,
            ),
        };
        let headers = HeaderFactory::new(&self.config.base_url).map_err(Error::initialization)?;

        let mut fetcher = PagedFetcher::new(transport, headers)
            .with_retry(RetryPolicy::from_config(&self.config))
            .with_page_size(self.config.page_size);
        if let Some(shutdown) = self.shutdown {
            fetcher = fetcher.with_shutdown(shutdown);
        }

        let mut client = DisclosureClient {
            fetcher,
            normalizer: RecordNormalizer::new(self.config.utc_offset()),
            directory: PoliticianDirectory::new(),
            proxy,
            latest_max_pages: self.config.latest_max_pages,
        };

        client
            .fetcher
            .warm_up(TRADES_PATH)
            .await
            .map_err(Error::initialization)?;
        client.directory = client.seed().await.map_err(Error::initialization)?;

        info!(
            politicians = client.directory.len(),
            proxy = ?client.proxy.as_ref().map(ToString::to_string),
            "Disclosure client initialized"
        );
        Ok(client)
    }
}

/// Client for the Capitol Trades backend.
///
/// Construction always seeds the politician directory; a client whose seed
/// crawl failed is never returned.
pub struct DisclosureClient {
    fetcher: PagedFetcher,
    normalizer: RecordNormalizer,
    directory: PoliticianDirectory,
    proxy: Option<ProxyIdentity>,
    latest_max_pages: u32,
}

impl DisclosureClient {
    #[must_use]
    pub fn builder(config: ApiConfig) -> DisclosureClientBuilder {
        DisclosureClientBuilder::new(config)
    }

    /// Acquire a proxy from `pool` and initialize over a reqwest session.
    ///
    /// # Errors
    ///
    /// See [`DisclosureClientBuilder::initialize`].
    pub async fn initialize(pool: &ProxyPool, config: ApiConfig) -> Result<Self> {
        DisclosureClientBuilder::new(config).initialize(pool).await
    }

    async fn seed(&self) -> Result<PoliticianDirectory> {
        debug!("Seeding politician directory");
        let records = self
            .fetcher
            .fetch_all(POLITICIANS_PATH, &[], StopCondition::TotalItems)
            .await?;
        let batch = self.normalizer.politician_entries(&records);
        if !batch.is_clean() {
            warn!(
                skipped = batch.failures.len(),
                "Some politician entries were malformed"
            );
        }
        Ok(batch.into_iter().collect())
    }

    /// Re-crawl `/politicians`, replacing the directory only on success.
    ///
    /// # Errors
    ///
    /// Returns the crawl error; the existing directory is left untouched.
    pub async fn reseed(&mut self) -> Result<usize> {
        let directory = self.seed().await?;
        info!(politicians = directory.len(), "Politician directory reseeded");
        self.directory = directory;
        Ok(self.directory.len())
    }

    /// Politician ID to display name for every known politician.
    #[must_use]
    pub fn politicians(&self) -> &PoliticianDirectory {
        &self.directory
    }

    /// Proxy identity this session is bound to, if any.
    #[must_use]
    pub fn proxy(&self) -> Option<&ProxyIdentity> {
        self.proxy.as_ref()
    }

    #[must_use]
    pub fn latest_max_pages(&self) -> u32 {
        self.latest_max_pages
    }

    /// Find a politician ID by display name or last name.
    ///
    /// See [`PoliticianDirectory::lookup`] for the matching rules.
    #[must_use]
    pub fn lookup_politician_id(&self, name: &str) -> Option<&PoliticianId> {
        self.directory.lookup(name)
    }

    /// Fetch committees by ID.
    ///
    /// IDs whose response carries no `data` are skipped. Committees are
    /// deduplicated by ID, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Fails fast on transport or HTTP errors. Malformed committee payloads
    /// are reported in [`Batch::failures`] with the index of the requested ID.
    pub async fn get_committees<I, S>(&self, ids: I) -> Result<Batch<Committee>>
    where
        I: IntoIterator<Item = S>,
        S: Into<CommitteeId>,
    {
        let mut batch = Batch::new();
        let mut requested = HashSet::new();
        let mut seen = HashSet::new();

        for (index, id) in ids.into_iter().map(Into::into).enumerate() {
            if !requested.insert(id.clone()) {
                continue;
            }

            let path = format!("{COMMITTEES_PATH}/{id}");
            let body = self.fetcher.fetch_one(&path, &[]).await?;
            let envelope = ObjectEnvelope::deserialize(&body).map_err(|e| {
                Error::MalformedResponse {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?;

            let Some(data) = envelope.data else {
                debug!(committee = %id, "No committee data, skipping");
                continue;
            };

            match self.normalizer.committee(&data) {
                Ok(committee) => {
                    if seen.insert(committee.committee_id.clone()) {
                        batch.records.push(committee);
                    }
                }
                Err(Error::MalformedRecord { reason, .. }) => {
                    warn!(committee = %id, reason = %reason, "Malformed committee record");
                    batch.failures.push(Error::MalformedRecord { index, reason });
                }
                Err(err) => return Err(err),
            }
        }

        info!(count = batch.len(), "Fetched committees");
        Ok(batch)
    }

    /// Every raw trade record of a known politician, across all pages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPolitician`] if `id` is not in the directory,
    /// otherwise any crawl error.
    pub async fn trades_for_politician(&self, id: &PoliticianId) -> Result<Vec<Value>> {
        if !self.directory.contains(id) {
            return Err(Error::UnknownPolitician(id.to_string()));
        }

        let extra = vec![
            ("txDate".to_string(), "all".to_string()),
            ("politician".to_string(), id.to_string()),
        ];
        let records = self
            .fetcher
            .fetch_all(TRADES_PATH, &extra, StopCondition::TotalItems)
            .await?;

        info!(politician = %id, count = records.len(), "Fetched politician trades");
        Ok(records)
    }

    /// Single page of trades for a politician, given an ID or a trade of theirs.
    ///
    /// # Errors
    ///
    /// Fails on transport or HTTP errors, or a malformed envelope.
    pub async fn all_trades_for<'a>(
        &self,
        query: impl Into<TradeQuery<'a>>,
    ) -> Result<Batch<Trade>> {
        let id = query.into().politician_id();
        let params = vec![("politician".to_string(), id.to_string())];

        let body = self.fetcher.fetch_one(TRADES_PATH, &params).await?;
        let envelope = PageEnvelope::deserialize(&body).map_err(|e| Error::MalformedResponse {
            path: TRADES_PATH.to_string(),
            reason: e.to_string(),
        })?;

        let batch = self.normalizer.trades(&envelope.data);
        info!(
            politician = %id,
            count = batch.len(),
            failed = batch.failures.len(),
            "Fetched trades"
        );
        Ok(batch)
    }

    /// The most recent trades across all politicians, capped at `max_pages` pages.
    ///
    /// A cap of zero returns an empty batch without touching the network.
    ///
    /// # Errors
    ///
    /// Fails fast on transport or HTTP errors. Malformed trades are reported
    /// in [`Batch::failures`].
    pub async fn latest_trades(&self, max_pages: u32) -> Result<Batch<Trade>> {
        let records = self
            .fetcher
            .fetch_all(TRADES_PATH, &[], StopCondition::MaxPages(max_pages))
            .await?;

        let batch = self.normalizer.trades(&records);
        info!(count = batch.len(), failed = batch.failures.len(), "Fetched latest trades");
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::fixtures::{page_json, politician_json, trade_json};
    use crate::testkit::transport::ScriptedTransport;

    async fn client(transport: &Arc<ScriptedTransport>) -> DisclosureClient {
        transport.push_json(TRADES_PATH, page_json(&[], 0));
        transport.serve_pages(
            POLITICIANS_PATH,
            vec![
                politician_json("P000197", "Pelosi, Nancy"),
                politician_json("D000001", "Doe, Jane"),
            ],
            None,
        );
        let transport: Arc<dyn HttpTransport> = transport.clone();
        DisclosureClient::builder(ApiConfig::default())
            .transport(transport)
            .initialize_direct()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn initialization_seeds_directory() {
        let transport = Arc::new(ScriptedTransport::new());
        let client = client(&transport).await;

        assert_eq!(client.politicians().len(), 2);
        assert!(client.proxy().is_none());
        assert_eq!(
            client.lookup_politician_id("pelosi").map(PoliticianId::as_str),
            Some("P000197")
        );
    }

    #[tokio::test]
    async fn unknown_politician_is_rejected_without_request() {
        let transport = Arc::new(ScriptedTransport::new());
        let client = client(&transport).await;
        let before = transport.requests().len();

        let result = client.trades_for_politician(&PoliticianId::new("X999")).await;

        assert!(matches!(result, Err(Error::UnknownPolitician(id)) if id == "X999"));
        assert_eq!(transport.requests().len(), before);
    }

    #[tokio::test]
    async fn all_trades_for_accepts_a_trade() {
        let transport = Arc::new(ScriptedTransport::new());
        let client = client(&transport).await;
        let record = trade_json(1, "D000001", "2024-02-01", "AAPL", "sell");
        let trade = client.normalizer.trade(&record).unwrap();
        transport.push_json(TRADES_PATH, page_json(&[record], 1));

        let batch = client.all_trades_for(&trade).await.unwrap();

        assert_eq!(batch.len(), 1);
        let last = transport.requests().pop().unwrap();
        assert_eq!(last.param("politician"), Some("D000001"));
        assert_eq!(last.param("page"), None);
    }

    #[tokio::test]
    async fn reseed_replaces_directory() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut client = client(&transport).await;
        transport.serve_pages(
            POLITICIANS_PATH,
            vec![politician_json("N1", "New, Member")],
            None,
        );

        assert_eq!(client.reseed().await.unwrap(), 1);
        assert!(client.lookup_politician_id("pelosi").is_none());
        assert!(client.lookup_politician_id("new").is_some());
    }

    #[tokio::test]
    async fn failed_reseed_keeps_existing_directory() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut client = client(&transport).await;
        transport.clear(POLITICIANS_PATH);
        transport.push_status(POLITICIANS_PATH, 500);

        assert!(client.reseed().await.is_err());
        assert_eq!(client.politicians().len(), 2);
    }
}
