//! Raw JSON records to domain entities.
//!
//! Dates arrive either as ISO-8601 timestamps (`pubDate`) or as bare
//! `YYYY-MM-DD` dates (`txDate`, `filingDate`, `dob`). The wall-clock value
//! is kept and labelled with the configured target offset.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::dto::{
    CommitteeRecord, IssuerRecord, PoliticianEntry, StatsRecord, TradeRecord,
};
use crate::domain::{
    Asset, Batch, Chamber, Committee, CommitteeId, CommitteeMember, Issuer, Politician,
    PoliticianId, Stats, Trade, TxType,
};
use crate::error::{Error, Result};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

type Reason = String;

/// Maps raw records into [`Trade`], [`Committee`] and directory entries.
#[derive(Debug, Clone, Copy)]
pub struct RecordNormalizer {
    offset: FixedOffset,
}

impl RecordNormalizer {
    #[must_use]
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Normalize one trade record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] (index 0) when a required field is
    /// missing or a date does not parse.
    pub fn trade(&self, raw: &Value) -> Result<Trade> {
        self.parse_trade(raw)
            .map_err(|reason| Error::MalformedRecord { index: 0, reason })
    }

    /// Normalize a page of trade records, isolating per-record failures.
    #[must_use]
    pub fn trades(&self, raws: &[Value]) -> Batch<Trade> {
        collect(raws, "trade", |raw| self.parse_trade(raw))
    }

    /// Normalize a committee object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] when required fields are missing.
    pub fn committee(&self, raw: &Value) -> Result<Committee> {
        self.parse_committee(raw)
            .map_err(|reason| Error::MalformedRecord { index: 0, reason })
    }

    /// Normalize `/politicians` entries into `(id, full name)` pairs.
    #[must_use]
    pub fn politician_entries(&self, raws: &[Value]) -> Batch<(PoliticianId, String)> {
        collect(raws, "politician", |raw| {
            let entry = PoliticianEntry::deserialize(raw).map_err(|e| e.to_string())?;
            Ok((PoliticianId::new(entry.politician_id), entry.full_name))
        })
    }

    /// Parse a timestamp or date into the target offset.
    ///
    /// # Errors
    ///
    /// Returns the reason when `value` matches none of the accepted formats.
    pub fn parse_datetime(
        &self,
        value: &str,
    ) -> std::result::Result<DateTime<FixedOffset>, Reason> {
        let value = value.trim();
        let naive = DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.naive_local())
            .ok()
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            })
            .or_else(|| {
                NaiveDate::parse_from_str(value, DATE_FORMAT)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .ok_or_else(|| format!("unparseable date '{value}'"))?;

        self.offset
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| format!("date '{value}' does not exist in target zone"))
    }

    fn date_field(
        &self,
        field: &str,
        value: &str,
    ) -> std::result::Result<DateTime<FixedOffset>, Reason> {
        self.parse_datetime(value).map_err(|reason| format!("{field}: {reason}"))
    }

    fn parse_trade(&self, raw: &Value) -> std::result::Result<Trade, Reason> {
        let record = TradeRecord::deserialize(raw).map_err(|e| e.to_string())?;

        let chamber = Chamber::from_str(&record.chamber)?;
        let pub_date = self.date_field("pubDate", &record.pub_date)?;
        let filing_date = self.date_field("filingDate", &record.filing_date)?;
        let tx_date = self.date_field("txDate", &record.tx_date)?;

        let politician = record.politician;
        let politician = Politician {
            state_id: politician.state_id,
            chamber: match politician.chamber.as_deref() {
                Some(c) => Chamber::from_str(c)?,
                None => chamber,
            },
            dob: politician
                .dob
                .as_deref()
                .map(|dob| self.date_field("dob", dob).map(|dt| dt.date_naive()))
                .transpose()?,
            first_name: politician.first_name,
            last_name: politician.last_name,
            gender: politician.gender,
            nickname: politician.nickname,
            party: politician.party,
        };

        Ok(Trade {
            tx_id: record.tx_id,
            politician_id: PoliticianId::new(record.politician_id),
            asset_id: record.asset_id,
            issuer_id: record.issuer_id,
            pub_date,
            filing_date,
            tx_date,
            tx_type: TxType::from(record.tx_type),
            tx_type_extended: record.tx_type_extended,
            has_capital_gains: record.has_capital_gains.unwrap_or(false),
            owner: record.owner,
            chamber,
            price: record.price.as_ref().map(|p| decimal("price", p)).transpose()?,
            size: record.size.as_ref().and_then(text),
            size_range_high: record.size_range_high,
            size_range_low: record.size_range_low,
            value: whole("value", &record.value)?,
            filing_id: record.filing_id,
            filing_url: record.filing_url,
            reporting_gap: record.reporting_gap,
            comment: record.comment,
            committees: record.committees.unwrap_or_default(),
            labels: record
                .labels
                .unwrap_or_default()
                .iter()
                .filter_map(text)
                .collect(),
            asset: Asset {
                asset_type: record.asset.asset_type,
                asset_ticker: record.asset.asset_ticker,
                instrument: record.asset.instrument,
            },
            issuer: record.issuer.map(issuer),
            politician,
        })
    }

    fn parse_committee(&self, raw: &Value) -> std::result::Result<Committee, Reason> {
        let record = CommitteeRecord::deserialize(raw).map_err(|e| e.to_string())?;
        Ok(Committee {
            committee_id: CommitteeId::new(record.committee_id),
            chamber: record.chamber,
            committee_name: record.committee_name,
            committee_url: record.committee_url,
            members: record
                .members
                .into_iter()
                .map(|m| CommitteeMember {
                    politician_id: PoliticianId::new(m.politician_id),
                    member_role: m.member_role,
                    side: m.side,
                    chamber: m.chamber,
                    party: m.party,
                    first_name: m.first_name,
                    last_name: m.last_name,
                    middle_name: m.middle_name,
                    nickname: m.nickname,
                })
                .collect(),
            stats: self.stats(record.stats)?,
        })
    }

    fn stats(&self, record: StatsRecord) -> std::result::Result<Stats, Reason> {
        let date = |field: &str, value: Option<String>| {
            value
                .as_deref()
                .map(|v| self.date_field(field, v))
                .transpose()
        };
        Ok(Stats {
            count_issuers: record.count_issuers,
            count_politicians: record.count_politicians,
            count_trades: record.count_trades,
            date_first_traded: date("dateFirstTraded", record.date_first_traded)?,
            date_last_traded: date("dateLastTraded", record.date_last_traded)?,
            volume: match record.volume {
                Some(Value::Null) | None => 0,
                Some(volume) => whole("volume", &volume)?,
            },
        })
    }
}

fn collect<T>(
    raws: &[Value],
    kind: &'static str,
    mut parse: impl FnMut(&Value) -> std::result::Result<T, Reason>,
) -> Batch<T> {
    let mut batch = Batch::new();
    for (index, raw) in raws.iter().enumerate() {
        match parse(raw) {
            Ok(record) => batch.records.push(record),
            Err(reason) => {
                warn!(kind, index, reason = %reason, "Skipping malformed record");
                batch.failures.push(Error::MalformedRecord { index, reason });
            }
        }
    }
    batch
}

fn issuer(record: IssuerRecord) -> Issuer {
    Issuer {
        state_id: record.state_id,
        c2iq: record.c2iq,
        country: record.country,
        issuer_name: record.issuer_name,
        issuer_ticker: record.issuer_ticker,
        sector: record.sector,
    }
}

fn decimal(field: &str, value: &Value) -> std::result::Result<Decimal, Reason> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => return Err(format!("{field}: unexpected value {other}")),
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| format!("{field}: {e}"))
}

/// Dollar amount rounded to a whole number; out-of-range values are rejected.
fn whole(field: &str, value: &Value) -> std::result::Result<i64, Reason> {
    decimal(field, value)?
        .round()
        .to_i64()
        .ok_or_else(|| format!("{field}: {value} does not fit a whole dollar amount"))
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
