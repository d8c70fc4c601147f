//! Capitol Trades backend adapter.
//!
//! - [`proxy`]: Pool of proxy identities, one per client session.
//! - [`headers`]: Browser-like request headers with a rotating User-Agent.
//! - [`transport`]: reqwest implementation of [`HttpTransport`](crate::port::HttpTransport).
//! - [`fetcher`]: Pagination over the backend's paged endpoints.
//! - [`normalize`]: Raw JSON to domain entities.
//! - [`client`]: [`DisclosureClient`], the public entry point.

pub mod client;
pub mod dto;
pub mod fetcher;
pub mod headers;
pub mod normalize;
pub mod proxy;
pub mod retry;
pub mod transport;

pub use client::{DisclosureClient, DisclosureClientBuilder};
pub use fetcher::{PagedFetcher, StopCondition};
pub use headers::HeaderFactory;
pub use normalize::RecordNormalizer;
pub use proxy::{ProxyIdentity, ProxyPool};
pub use retry::RetryPolicy;
pub use transport::ReqwestTransport;
