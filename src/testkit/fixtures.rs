//! Raw JSON records shaped like the Capitol Trades backend.

use chrono::{Days, NaiveDate};
use serde_json::{json, Value};

/// A complete `/trades` record.
///
/// Filing is ten days after `tx_date` and publication twelve days after,
/// at 13:05 UTC.
pub fn trade_json(
    tx_id: i64,
    politician_id: &str,
    tx_date: &str,
    ticker: &str,
    tx_type: &str,
) -> Value {
    let date = NaiveDate::parse_from_str(tx_date, "%Y-%m-%d")
        .expect("fixture tx_date should be YYYY-MM-DD");
    let filing = date + Days::new(10);
    let published = date + Days::new(12);

    json!({
        "_txId": tx_id,
        "_politicianId": politician_id,
        "_assetId": 4_000 + tx_id,
        "_issuerId": 435_000 + tx_id,
        "pubDate": format!("{}T13:05:07.507Z", published.format("%Y-%m-%d")),
        "filingDate": filing.format("%Y-%m-%d").to_string(),
        "txDate": tx_date,
        "txType": tx_type,
        "txTypeExtended": null,
        "hasCapitalGains": false,
        "owner": "spouse",
        "chamber": "house",
        "price": 875.28,
        "size": 4,
        "sizeRangeHigh": 50_000,
        "sizeRangeLow": 15_001,
        "value": 15_000,
        "filingId": 700 + tx_id,
        "filingURL": "https://disclosures-clerk.house.gov/public_disc/ptr-pdfs/2024/20024542.pdf",
        "reportingGap": 12,
        "comment": "",
        "committees": ["hsju"],
        "labels": ["faang"],
        "asset": {
            "assetType": "stock",
            "assetTicker": ticker,
            "instrument": null
        },
        "issuer": {
            "_stateId": "ca",
            "c2iq": "NVDA:US",
            "country": "us",
            "issuerName": "NVIDIA Corp",
            "issuerTicker": format!("{ticker}:US"),
            "sector": "information-technology"
        },
        "politician": {
            "_stateId": "ca",
            "chamber": "house",
            "dob": "1940-03-26",
            "firstName": "Nancy",
            "gender": "female",
            "lastName": "Pelosi",
            "nickname": null,
            "party": "democrat"
        }
    })
}

/// A `/politicians` entry.
pub fn politician_json(politician_id: &str, full_name: &str) -> Value {
    json!({
        "_politicianId": politician_id,
        "_stateId": "ca",
        "chamber": "house",
        "fullName": full_name,
        "party": "democrat"
    })
}

/// A `/committees/{id}` payload with one member.
pub fn committee_json(committee_id: &str, name: &str) -> Value {
    json!({
        "_committeeId": committee_id,
        "chamber": "house",
        "committeeName": name,
        "committeeUrl": format!("https://example.house.gov/{committee_id}"),
        "members": [{
            "_politicianId": "P000197",
            "memberRole": "member",
            "side": "minority",
            "chamber": "house",
            "party": "democrat",
            "firstName": "Nancy",
            "lastName": "Pelosi"
        }],
        "stats": {
            "countIssuers": 3,
            "countPoliticians": 1,
            "countTrades": 7,
            "dateFirstTraded": "2020-01-02",
            "dateLastTraded": "2024-05-20",
            "volume": 125000
        }
    })
}

/// Paginated envelope around `records`.
pub fn page_json(records: &[Value], total_items: u64) -> Value {
    json!({
        "data": records,
        "meta": {"paging": {"totalItems": total_items}}
    })
}

/// `n` opaque records tagged with their position.
pub fn numbered_records(n: usize) -> Vec<Value> {
    (0..n).map(|i| json!({ "n": i })).collect()
}
