//! Builders for normalized domain values used across tests.

use chrono::{FixedOffset, Offset, Utc};

use super::fixtures::trade_json;
use crate::adapter::capitoltrades::RecordNormalizer;
use crate::domain::Trade;

/// Normalizer labelling dates as UTC.
pub fn normalizer() -> RecordNormalizer {
    RecordNormalizer::new(utc())
}

pub fn utc() -> FixedOffset {
    Utc.fix()
}

/// A normalized trade built from [`trade_json`] with transaction ID 1.
pub fn trade(politician_id: &str, tx_date: &str, ticker: &str, tx_type: &str) -> Trade {
    normalizer()
        .trade(&trade_json(1, politician_id, tx_date, ticker, tx_type))
        .expect("fixture trade should normalize")
}
