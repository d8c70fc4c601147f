//! In-process document store.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use crate::error::Result;
use crate::port::DocumentStore;

/// Thread-safe store keyed by `(collection, id)`.
///
/// Documents live only as long as the store; useful for tests and one-shot
/// CLI runs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: DashMap<(String, String), Value>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in `collection`.
    #[must_use]
    pub fn len(&self, collection: &str) -> usize {
        self.documents
            .iter()
            .filter(|entry| entry.key().0 == collection)
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn upsert(&self, collection: &str, id: &str, document: Value) -> Result<()> {
        self.documents
            .insert((collection.to_string(), id.to_string()), document);
        Ok(())
    }

    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        Ok(self
            .documents
            .get(&(collection.to_string(), id.to_string()))
            .map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn upsert_replaces_by_id() {
        let store = InMemoryStore::new();
        store.upsert("buys", "a", json!({"v": 1})).await.unwrap();
        store.upsert("buys", "a", json!({"v": 2})).await.unwrap();
        store.upsert("sales", "a", json!({"v": 3})).await.unwrap();

        assert_eq!(store.len("buys"), 1);
        assert_eq!(store.len("sales"), 1);
        assert_eq!(store.find_one("buys", "a").await.unwrap(), Some(json!({"v": 2})));
        assert_eq!(store.find_one("buys", "b").await.unwrap(), None);
    }
}
