//! Document persistence port.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// A document store keyed by collection and opaque ID.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert the document, replacing any existing one with the same ID.
    async fn upsert(&self, collection: &str, id: &str, document: Value) -> Result<()>;

    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Value>>;
}
