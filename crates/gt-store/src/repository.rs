//! Typed access to store collections
//!
//! A [`Repository`] wraps a [`RecordStore`] and (de)serializes one record
//! type, so callers work with domain structs instead of JSON values.

use crate::error::{StoreError, StoreResult};
use crate::store::RecordStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// A storable domain record
pub trait Record: Serialize + DeserializeOwned {
    /// Collection holding records of this type
    const COLLECTION: &'static str;

    /// Unique id within the collection
    fn id(&self) -> &str;
}

/// Typed CRUD over one collection
pub struct Repository<'s, T> {
    store: &'s dyn RecordStore,
    _record: PhantomData<fn() -> T>,
}

impl<'s, T: Record> Repository<'s, T> {
    /// Bind to a store
    #[inline]
    #[must_use]
    pub fn new(store: &'s dyn RecordStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Insert or overwrite `record` under its own id
    ///
    /// # Errors
    /// Serialization or backend failures.
    pub fn add(&self, record: &T) -> StoreResult<()> {
        let value = serde_json::to_value(record)?;
        self.store.put(T::COLLECTION, record.id(), value)
    }

    /// Fetch by id
    ///
    /// # Errors
    /// Serialization or backend failures.
    pub fn get(&self, id: &str) -> StoreResult<Option<T>> {
        self.store
            .get(T::COLLECTION, id)?
            .map(serde_json::from_value)
            .transpose()
            .map_err(StoreError::from)
    }

    /// Fetch by id, failing if absent
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when no such record exists.
    pub fn require(&self, id: &str) -> StoreResult<T> {
        self.get(id)?
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, id))
    }

    /// Apply a partial update in place and store the result
    ///
    /// The record keeps the id it was stored under even if `apply` changes
    /// the id field.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when no such record exists.
    pub fn update(&self, id: &str, apply: impl FnOnce(&mut T)) -> StoreResult<T> {
        let mut record = self.require(id)?;
        apply(&mut record);
        let value = serde_json::to_value(&record)?;
        self.store.put(T::COLLECTION, id, value)?;
        Ok(record)
    }

    /// Remove by id, reporting whether it existed
    ///
    /// # Errors
    /// Backend failures only.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.store.delete(T::COLLECTION, id)
    }

    /// Every record that decodes cleanly, in insertion order
    ///
    /// Records that fail to decode are skipped with a warning.
    ///
    /// # Errors
    /// Backend failures only.
    pub fn list(&self) -> StoreResult<Vec<T>> {
        let records = self
            .store
            .list(T::COLLECTION)?
            .into_iter()
            .filter_map(|(id, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(
                        collection = T::COLLECTION,
                        %id,
                        %err,
                        "skipping undecodable record"
                    );
                    None
                }
            })
            .collect();
        Ok(records)
    }

    /// Replace the whole collection with `records`
    ///
    /// # Errors
    /// Serialization or backend failures.
    pub fn replace_all<'r>(&self, records: impl IntoIterator<Item = &'r T>) -> StoreResult<()>
    where
        T: 'r,
    {
        self.store.clear(T::COLLECTION)?;
        records.into_iter().try_for_each(|r| self.add(r))
    }
}

impl<T> std::fmt::Debug for Repository<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("store", &self.store)
            .field("record", &std::any::type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        text: String,
    }

    impl Record for Note {
        const COLLECTION: &'static str = "notes";

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.into(),
            text: text.into(),
        }
    }

    #[test]
    fn crud_cycle() {
        let store = MemoryStore::new();
        let notes = Repository::<Note>::new(&store);

        notes.add(&note("n1", "hello")).unwrap();
        assert_eq!(notes.get("n1").unwrap(), Some(note("n1", "hello")));

        let updated = notes.update("n1", |n| n.text = "bye".into()).unwrap();
        assert_eq!(updated.text, "bye");
        assert_eq!(notes.require("n1").unwrap().text, "bye");

        assert!(notes.delete("n1").unwrap());
        assert!(notes.get("n1").unwrap().is_none());
    }

    #[test]
    fn missing_records() {
        let store = MemoryStore::new();
        let notes = Repository::<Note>::new(&store);
        assert!(notes.require("nope").unwrap_err().is_not_found());
        assert!(notes.update("nope", |_| {}).unwrap_err().is_not_found());
    }

    #[test]
    fn list_skips_garbage() {
        let store = MemoryStore::new();
        let notes = Repository::<Note>::new(&store);
        notes.add(&note("a", "first")).unwrap();
        store.put("notes", "bad", json!({"unexpected": true})).unwrap();
        notes.add(&note("b", "second")).unwrap();

        let listed = notes.list().unwrap();
        assert_eq!(listed, vec![note("a", "first"), note("b", "second")]);
    }

    #[test]
    fn replace_all_resets_collection() {
        let store = MemoryStore::new();
        let notes = Repository::<Note>::new(&store);
        notes.add(&note("old", "x")).unwrap();
        notes.replace_all(&[note("a", "1"), note("b", "2")]).unwrap();
        let ids: Vec<String> = notes.list().unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, ["a", "b"]);
    }
}
