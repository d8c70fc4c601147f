//! Persistence of normalized trades.
//!
//! Trades are filed by transaction type: purchases into [`BUYS`], sales into
//! [`SALES`], everything else (exchanges, receipts, unknown types) into
//! [`OTHER`]. Documents are keyed by [`Trade::id`], so re-archiving the same
//! disclosure replaces it.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Trade, TxType};
use crate::error::Result;
use crate::port::DocumentStore;

pub const BUYS: &str = "buys";
pub const SALES: &str = "sales";
pub const OTHER: &str = "other";

/// Files trades into a [`DocumentStore`].
#[derive(Clone)]
pub struct TradeArchive {
    store: Arc<dyn DocumentStore>,
}

impl TradeArchive {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Collection a trade belongs in.
    #[must_use]
    pub fn collection_for(trade: &Trade) -> &'static str {
        match trade.tx_type {
            TxType::Buy => BUYS,
            TxType::Sell => SALES,
            _ => OTHER,
        }
    }

    /// Upsert one trade, returning the collection it was filed under.
    ///
    /// # Errors
    ///
    /// Returns the store's error, or a JSON error if the trade cannot be
    /// serialized.
    pub async fn record(&self, trade: &Trade) -> Result<&'static str> {
        let collection = Self::collection_for(trade);
        let id = trade.id();
        self.store
            .upsert(collection, &id, serde_json::to_value(trade)?)
            .await?;
        debug!(collection, id = %id, "Archived trade");
        Ok(collection)
    }

    /// Upsert every trade, stopping at the first store error.
    ///
    /// # Errors
    ///
    /// See [`TradeArchive::record`].
    pub async fn record_all<'a, I>(&self, trades: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        let mut count = 0;
        for trade in trades {
            self.record(trade).await?;
            count += 1;
        }
        info!(count, "Archived trades");
        Ok(count)
    }

    /// Look up an archived trade by identity.
    ///
    /// # Errors
    ///
    /// Returns the store's error, or a JSON error if the stored document no
    /// longer matches the trade shape.
    pub async fn find(&self, collection: &str, id: &str) -> Result<Option<Trade>> {
        match self.store.find_one(collection, id).await? {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }
}
