//! In-memory result store
//!
//! Maps the opaque ids handed out by `search` to the raw backend records,
//! so `fetch` can return the full record later. Entries live for the whole
//! process; nothing is updated or evicted.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

/// Process-wide store of raw search records keyed by opaque id
#[derive(Clone, Default)]
pub struct ResultStore {
    inner: Arc<RwLock<HashMap<String, Value>>>,
}

impl ResultStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under `id`, replacing any previous record
    pub fn put(&self, id: impl Into<String>, record: Value) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), record);
    }

    /// Store `record` under a freshly generated id and return that id
    pub fn insert(&self, record: Value) -> String {
        let id = Uuid::new_v4().to_string();
        self.put(id.clone(), record);
        id
    }

    /// Look up the record stored under `id`
    pub fn get(&self, id: &str) -> Option<Value> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_and_get() {
        let store = ResultStore::new();
        store.put("abc", json!({ "title": "A" }));

        assert_eq!(store.get("abc"), Some(json!({ "title": "A" })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_unknown_id() {
        let store = ResultStore::new();
        assert!(store.get("nonexistent").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_generates_distinct_ids() {
        let store = ResultStore::new();
        let first = store.insert(json!({ "keyword": "shoes" }));
        let second = store.insert(json!({ "keyword": "shoes" }));

        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clones_share_entries() {
        let store = ResultStore::new();
        let handle = store.clone();
        let id = handle.insert(json!(1));

        assert_eq!(store.get(&id), Some(json!(1)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_are_not_lost() {
        let store = ResultStore::new();

        let tasks: Vec<_> = (0..8)
            .map(|task| {
                let store = store.clone();
                tokio::spawn(async move {
                    (0..50)
                        .map(|n| (store.insert(json!({ "task": task, "n": n })), task, n))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.extend(task.await.unwrap());
        }

        assert_eq!(store.len(), 400);
        for (id, task, n) in ids {
            assert_eq!(store.get(&id), Some(json!({ "task": task, "n": n })));
        }
    }
}
