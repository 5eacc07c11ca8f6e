//! Key-value record storage
//!
//! Provides the [`RecordStore`] trait that the rest of the workspace is
//! written against, and [`MemoryStore`], an in-process implementation that
//! stands in for browser-local storage.
//!
//! Records are JSON values grouped into named collections and keyed by id.
//! Writes are last-write-wins; there is no versioning.

use crate::error::StoreResult;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;

/// Collection used for plain string flags
pub const FLAGS_COLLECTION: &str = "gt_flags";

/// Durable record storage injected into services
///
/// Implementations must keep insertion order within a collection so
/// listings come back in the order records were first written.
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Fetch one record
    ///
    /// # Errors
    /// Backend failures only; a missing record is `Ok(None)`.
    fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Value>>;

    /// Insert or overwrite a record
    ///
    /// # Errors
    /// Backend failures only.
    fn put(&self, collection: &str, id: &str, value: Value) -> StoreResult<()>;

    /// Remove a record, reporting whether it existed
    ///
    /// # Errors
    /// Backend failures only.
    fn delete(&self, collection: &str, id: &str) -> StoreResult<bool>;

    /// All records of a collection as `(id, value)` pairs
    ///
    /// # Errors
    /// Backend failures only.
    fn list(&self, collection: &str) -> StoreResult<Vec<(String, Value)>>;

    /// Drop a whole collection
    ///
    /// # Errors
    /// Backend failures only.
    fn clear(&self, collection: &str) -> StoreResult<()>;

    /// Read a string flag
    ///
    /// # Errors
    /// Backend failures only.
    fn flag(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self
            .get(FLAGS_COLLECTION, key)?
            .and_then(|v| v.as_str().map(str::to_owned)))
    }

    /// Write a string flag
    ///
    /// # Errors
    /// Backend failures only.
    fn set_flag(&self, key: &str, value: &str) -> StoreResult<()> {
        self.put(FLAGS_COLLECTION, key, Value::String(value.to_owned()))
    }

    /// Remove a string flag
    ///
    /// # Errors
    /// Backend failures only.
    fn remove_flag(&self, key: &str) -> StoreResult<()> {
        self.delete(FLAGS_COLLECTION, key).map(|_| ())
    }
}

/// In-memory [`RecordStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<IndexMap<String, IndexMap<String, Value>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in a collection
    #[must_use]
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, IndexMap::len)
    }

    /// Whether every collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.read().values().all(IndexMap::is_empty)
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .and_then(|c| c.get(id))
            .cloned())
    }

    fn put(&self, collection: &str, id: &str, value: Value) -> StoreResult<()> {
        tracing::debug!(collection, id, "store put");
        self.collections
            .write()
            .entry(collection.to_owned())
            .or_default()
            .insert(id.to_owned(), value);
        Ok(())
    }

    fn delete(&self, collection: &str, id: &str) -> StoreResult<bool> {
        tracing::debug!(collection, id, "store delete");
        Ok(self
            .collections
            .write()
            .get_mut(collection)
            .and_then(|c| c.shift_remove(id))
            .is_some())
    }

    fn list(&self, collection: &str) -> StoreResult<Vec<(String, Value)>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .map(|c| c.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default())
    }

    fn clear(&self, collection: &str) -> StoreResult<()> {
        tracing::debug!(collection, "store clear");
        self.collections.write().shift_remove(collection);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn put_get_delete() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.put("things", "a", json!({"n": 1})).unwrap();
        assert_eq!(store.get("things", "a").unwrap(), Some(json!({"n": 1})));
        assert_eq!(store.get("things", "b").unwrap(), None);
        assert_eq!(store.len("things"), 1);

        assert!(store.delete("things", "a").unwrap());
        assert!(!store.delete("things", "a").unwrap());
        assert_eq!(store.len("things"), 0);
    }

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::new();
        store.put("things", "a", json!(1)).unwrap();
        store.put("things", "a", json!(2)).unwrap();
        assert_eq!(store.get("things", "a").unwrap(), Some(json!(2)));
        assert_eq!(store.len("things"), 1);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let store = MemoryStore::new();
        for id in ["c", "a", "b"] {
            store.put("things", id, json!(id)).unwrap();
        }
        store.put("things", "a", json!("again")).unwrap();
        let ids: Vec<String> = store.list("things").unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn clear_drops_only_one_collection() {
        let store = MemoryStore::new();
        store.put("one", "x", json!(1)).unwrap();
        store.put("two", "y", json!(2)).unwrap();
        store.clear("one").unwrap();
        assert!(store.list("one").unwrap().is_empty());
        assert_eq!(store.len("two"), 1);
    }

    #[test]
    fn flags() {
        let store = MemoryStore::new();
        assert_eq!(store.flag("k").unwrap(), None);
        store.set_flag("k", "true").unwrap();
        assert_eq!(store.flag("k").unwrap().as_deref(), Some("true"));
        store.remove_flag("k").unwrap();
        assert_eq!(store.flag("k").unwrap(), None);
    }
}
