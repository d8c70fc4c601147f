//! Capitol Trades - Client for congressional stock-trade disclosures.
//!
//! Talks to the backend behind capitoltrades.com through a pool of proxy
//! identities, crawls its paginated endpoints and normalizes raw records
//! into typed trades and committees.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Trades, politicians, committees and the politician directory
//! - [`port`] - Seams for HTTP transport and document persistence
//! - [`adapter`] - The Capitol Trades client, the in-memory store and the CLI
//! - [`application`] - Trade archiving over a document store
//! - [`infrastructure`] - Configuration, logging and client bootstrap
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use capitoltrades::adapter::capitoltrades::{DisclosureClient, ProxyPool};
//! use capitoltrades::infrastructure::config::Config;
//!
//! # async fn run() -> capitoltrades::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let pool = ProxyPool::from_config(&config.proxy);
//! let client = DisclosureClient::initialize(&pool, config.api.clone()).await?;
//!
//! if let Some(id) = client.lookup_politician_id("pelosi") {
//!     let trades = client.all_trades_for(id).await?;
//!     println!("{} trades", trades.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
