//! Disclosed stock trades.
//!
//! A [`Trade`] is one transaction reported by a member of Congress. Three
//! dates travel with it: when the transaction happened, when it was filed,
//! and when the disclosure was published. Well-formed data satisfies
//! `tx_date <= filing_date <= pub_date`, but upstream does not guarantee it,
//! so the ordering is not enforced here.
//!
//! # Examples
//!
//! ```
//! use capitoltrades::domain::trade::TxType;
//!
//! assert_eq!("sell".parse::<TxType>().unwrap(), TxType::Sell);
//! assert_eq!(TxType::Sell.capitalized(), "Sell");
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::PoliticianId;
use super::politician::{Asset, Chamber, Issuer, Politician};

/// Transaction type of a disclosed trade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TxType {
    Buy,
    Sell,
    Exchange,
    Receive,
    /// A type the upstream API added that this crate does not know yet.
    Other(String),
}

impl TxType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Exchange => "exchange",
            Self::Receive => "receive",
            Self::Other(s) => s,
        }
    }

    /// First letter upper-cased, the rest lower-cased (`sell` -> `Sell`).
    #[must_use]
    pub fn capitalized(&self) -> String {
        let mut chars = self.as_str().chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

impl FromStr for TxType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "buy" => Self::Buy,
            "sell" => Self::Sell,
            "exchange" => Self::Exchange,
            "receive" => Self::Receive,
            _ => Self::Other(s.to_string()),
        })
    }
}

impl From<String> for TxType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(tx_type) => tx_type,
            Err(never) => match never {},
        }
    }
}

impl From<TxType> for String {
    fn from(tx_type: TxType) -> Self {
        tx_type.as_str().to_string()
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single disclosed transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub tx_id: i64,
    pub politician_id: PoliticianId,
    pub asset_id: i64,
    pub issuer_id: i64,
    pub pub_date: DateTime<FixedOffset>,
    pub filing_date: DateTime<FixedOffset>,
    pub tx_date: DateTime<FixedOffset>,
    pub tx_type: TxType,
    pub tx_type_extended: Option<String>,
    pub has_capital_gains: bool,
    pub owner: Option<String>,
    pub chamber: Chamber,
    pub price: Option<Decimal>,
    pub size: Option<String>,
    pub size_range_high: Option<i64>,
    pub size_range_low: Option<i64>,
    pub value: i64,
    pub filing_id: Option<i64>,
    pub filing_url: Option<String>,
    /// Days between the transaction and its disclosure, as reported upstream.
    pub reporting_gap: Option<i64>,
    pub comment: Option<String>,
    pub committees: Vec<String>,
    pub labels: Vec<String>,
    pub asset: Asset,
    pub issuer: Option<Issuer>,
    pub politician: Politician,
}

impl Trade {
    /// Stable identity derived from politician, transaction date, ticker and type.
    ///
    /// Format: `{politician_id}-{DDMMYY}-{ticker}-{Type}`, e.g.
    /// `P000197-150324-NVDA-Buy`. Assets without a ticker use `NA`.
    #[must_use]
    pub fn id(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.politician_id,
            self.tx_date.format("%d%m%y"),
            self.asset.asset_ticker.as_deref().unwrap_or("NA"),
            self.tx_type.capitalized()
        )
    }

    /// Time between the transaction and its filing.
    #[must_use]
    pub fn filing_trade_diff(&self) -> TimeDelta {
        self.filing_date - self.tx_date
    }

    /// Time between the transaction and its publication.
    #[must_use]
    pub fn pub_trade_diff(&self) -> TimeDelta {
        self.pub_date - self.tx_date
    }
}

/// Selects whose trades to fetch: a politician ID, or the politician behind
/// an already-fetched trade.
#[derive(Debug, Clone, Copy)]
pub enum TradeQuery<'a> {
    ById(&'a PoliticianId),
    ByTrade(&'a Trade),
}

impl<'a> TradeQuery<'a> {
    /// Resolve the query into the politician ID it refers to.
    #[must_use]
    pub fn politician_id(&self) -> &'a PoliticianId {
        match self {
            Self::ById(id) => id,
            Self::ByTrade(trade) => &trade.politician_id,
        }
    }
}

impl<'a> From<&'a PoliticianId> for TradeQuery<'a> {
    fn from(id: &'a PoliticianId) -> Self {
        Self::ById(id)
    }
}

impl<'a> From<&'a Trade> for TradeQuery<'a> {
    fn from(trade: &'a Trade) -> Self {
        Self::ByTrade(trade)
    }
}
