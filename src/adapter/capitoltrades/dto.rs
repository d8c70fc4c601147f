//! Wire shapes of the Capitol Trades backend.
//!
//! Field names follow the API's camelCase, with identifiers prefixed by an
//! underscore (`_txId`, `_politicianId`). Required fields are plain types so
//! serde reports them by name when absent.

use serde::Deserialize;
use serde_json::Value;

/// Envelope of every paginated endpoint.
#[derive(Debug, Deserialize)]
pub struct PageEnvelope {
    pub data: Vec<Value>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

impl PageEnvelope {
    #[must_use]
    pub fn total_items(&self) -> Option<u64> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.paging.as_ref())
            .map(|paging| paging.total_items)
    }
}

#[derive(Debug, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub paging: Option<Paging>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub total_items: u64,
}

/// Envelope of single-object endpoints such as `/committees/{id}`.
#[derive(Debug, Deserialize)]
pub struct ObjectEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
}

/// Entry of `/politicians`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliticianEntry {
    #[serde(rename = "_politicianId")]
    pub politician_id: String,
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    #[serde(rename = "_txId")]
    pub tx_id: i64,
    #[serde(rename = "_politicianId")]
    pub politician_id: String,
    #[serde(rename = "_assetId")]
    pub asset_id: i64,
    #[serde(rename = "_issuerId")]
    pub issuer_id: i64,
    pub pub_date: String,
    pub filing_date: String,
    pub tx_date: String,
    pub tx_type: String,
    pub tx_type_extended: Option<String>,
    pub has_capital_gains: Option<bool>,
    pub owner: Option<String>,
    pub chamber: String,
    pub price: Option<Value>,
    pub size: Option<Value>,
    pub size_range_high: Option<i64>,
    pub size_range_low: Option<i64>,
    pub value: Value,
    pub filing_id: Option<i64>,
    #[serde(rename = "filingURL")]
    pub filing_url: Option<String>,
    pub reporting_gap: Option<i64>,
    pub comment: Option<String>,
    pub committees: Option<Vec<String>>,
    pub labels: Option<Vec<Value>>,
    pub asset: AssetRecord,
    pub issuer: Option<IssuerRecord>,
    pub politician: PoliticianRecord,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub asset_type: String,
    pub asset_ticker: Option<String>,
    pub instrument: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerRecord {
    #[serde(rename = "_stateId")]
    pub state_id: Option<String>,
    pub c2iq: Option<String>,
    pub country: Option<String>,
    pub issuer_name: Option<String>,
    pub issuer_ticker: Option<String>,
    pub sector: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliticianRecord {
    #[serde(rename = "_stateId")]
    pub state_id: String,
    pub chamber: Option<String>,
    pub dob: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub nickname: Option<String>,
    pub party: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeRecord {
    #[serde(rename = "_committeeId")]
    pub committee_id: String,
    pub chamber: String,
    pub committee_name: String,
    #[serde(default)]
    pub committee_url: String,
    #[serde(default)]
    pub members: Vec<CommitteeMemberRecord>,
    #[serde(default)]
    pub stats: StatsRecord,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeMemberRecord {
    #[serde(rename = "_politicianId")]
    pub politician_id: String,
    pub member_role: String,
    pub side: String,
    pub chamber: String,
    pub party: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub nickname: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsRecord {
    pub count_issuers: u64,
    pub count_politicians: u64,
    pub count_trades: u64,
    pub date_first_traded: Option<String>,
    pub date_last_traded: Option<String>,
    pub volume: Option<Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn page_envelope_reads_total_items() {
        let page: PageEnvelope = serde_json::from_value(json!({
            "data": [{"a": 1}],
            "meta": {"paging": {"page": 1, "size": 100, "totalItems": 412, "totalPages": 5}}
        }))
        .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total_items(), Some(412));
    }

    #[test]
    fn page_envelope_tolerates_missing_meta() {
        let page: PageEnvelope = serde_json::from_value(json!({"data": []})).unwrap();
        assert_eq!(page.total_items(), None);
    }

    #[test]
    fn page_envelope_requires_data() {
        assert!(serde_json::from_value::<PageEnvelope>(json!({"meta": {}})).is_err());
    }

    #[test]
    fn object_envelope_accepts_null_data() {
        let envelope: ObjectEnvelope = serde_json::from_value(json!({"data": null})).unwrap();
        assert!(envelope.data.is_none());
    }
}
