//! In-memory remote store.
//!
//! The reference `RemoteStore` implementation: a process-local map keyed by
//! slash-separated paths. Used as the default store in local development and
//! as the backing store in tests.

use async_trait::async_trait;
use concierge_core::error::Result;
use concierge_core::store::RemoteStore;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A `RemoteStore` over a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryRemoteStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl InMemoryRemoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all entries whose path starts with `prefix`, in key order.
    ///
    /// Introspection helper for tests and local debugging.
    pub async fn entries_under(&self, prefix: &str) -> Vec<(String, Value)> {
        let entries = self.entries.read().await;
        let mut matching: Vec<(String, Value)> = entries
            .iter()
            .filter(|(path, _)| path.starts_with(prefix))
            .map(|(path, value)| (path.clone(), value.clone()))
            .collect();
        matching.sort_by(|a, b| a.0.cmp(&b.0));
        matching
    }
}

#[async_trait]
impl RemoteStore for InMemoryRemoteStore {
    async fn save(&self, path: &str, value: Value) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(path.to_string(), value);
        Ok(())
    }

    async fn push(&self, path: &str, value: Value) -> Result<String> {
        let key = Uuid::new_v4().simple().to_string();
        let mut entries = self.entries.write().await;
        entries.insert(format!("{path}/{key}"), value);
        Ok(key)
    }

    async fn get(&self, path: &str) -> Result<Option<Value>> {
        let entries = self.entries.read().await;
        Ok(entries.get(path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_save_then_get() {
        let store = InMemoryRemoteStore::new();
        store
            .save("chat_topics/flutter", json!({"count": 1}))
            .await
            .unwrap();

        let value = store.get("chat_topics/flutter").await.unwrap().unwrap();
        assert_eq!(value["count"], 1);
    }

    #[tokio::test]
    async fn test_get_missing_path() {
        let store = InMemoryRemoteStore::new();
        assert!(store.get("nothing/here").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let store = InMemoryRemoteStore::new();
        store.save("k", json!(1)).await.unwrap();
        store.save("k", json!(2)).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().unwrap(), json!(2));
    }

    #[tokio::test]
    async fn test_push_generates_distinct_keys() {
        let store = InMemoryRemoteStore::new();
        let a = store.push("chat_messages", json!({"n": 1})).await.unwrap();
        let b = store.push("chat_messages", json!({"n": 2})).await.unwrap();
        assert_ne!(a, b);

        let entries = store.entries_under("chat_messages/").await;
        assert_eq!(entries.len(), 2);
    }
}
