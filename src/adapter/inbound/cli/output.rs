//! JSON rendering for command results.

use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::Batch;
use crate::error::Result;

/// Records plus stringified per-record failures.
pub fn batch<T: Serialize>(batch: &Batch<T>) -> Result<Value> {
    Ok(json!({
        "records": serde_json::to_value(&batch.records)?,
        "failures": batch.failures.iter().map(ToString::to_string).collect::<Vec<_>>(),
    }))
}

/// Print `value` to stdout, pretty unless `compact`.
pub fn print(value: &Value, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}
