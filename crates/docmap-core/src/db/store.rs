use crate::{
    db::StoreError,
    serialize::{deserialize_bounded, serialize},
    value::{Document, Value},
};
use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, RwLock},
};

///
/// DocumentStore
///
/// Persistence boundary for documents, keyed by collection name and the
/// identity value stored under `_id`.
///

pub trait DocumentStore {
    /// Insert or overwrite the document stored under `id`.
    fn replace(&self, collection: &str, id: &Value, document: &Document) -> Result<(), StoreError>;

    fn find(&self, collection: &str, id: &Value) -> Result<Option<Document>, StoreError>;

    /// All documents of a collection, in identity order.
    fn scan(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    fn count(&self, collection: &str) -> Result<usize, StoreError>;

    /// Remove one document; returns whether it existed.
    fn delete(&self, collection: &str, id: &Value) -> Result<bool, StoreError>;

    /// Remove every document of a collection; returns how many were removed.
    fn clear(&self, collection: &str) -> Result<usize, StoreError>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn replace(
        &self,
        collection: &str,
        id: &Value,
        document: &Document,
    ) -> Result<(), StoreError> {
        (**self).replace(collection, id, document)
    }

    fn find(&self, collection: &str, id: &Value) -> Result<Option<Document>, StoreError> {
        (**self).find(collection, id)
    }

    fn scan(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        (**self).scan(collection)
    }

    fn count(&self, collection: &str) -> Result<usize, StoreError> {
        (**self).count(collection)
    }

    fn delete(&self, collection: &str, id: &Value) -> Result<bool, StoreError> {
        (**self).delete(collection, id)
    }

    fn clear(&self, collection: &str) -> Result<usize, StoreError> {
        (**self).clear(collection)
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    fn replace(
        &self,
        collection: &str,
        id: &Value,
        document: &Document,
    ) -> Result<(), StoreError> {
        (**self).replace(collection, id, document)
    }

    fn find(&self, collection: &str, id: &Value) -> Result<Option<Document>, StoreError> {
        (**self).find(collection, id)
    }

    fn scan(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        (**self).scan(collection)
    }

    fn count(&self, collection: &str) -> Result<usize, StoreError> {
        (**self).count(collection)
    }

    fn delete(&self, collection: &str, id: &Value) -> Result<bool, StoreError> {
        (**self).delete(collection, id)
    }

    fn clear(&self, collection: &str) -> Result<usize, StoreError> {
        (**self).clear(collection)
    }
}

///
/// StoreConfig
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StoreConfig {
    /// Upper bound on one encoded document, checked on write and on read.
    pub max_document_bytes: usize,
}

impl StoreConfig {
    pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 4 * 1024 * 1024;
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: Self::DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

///
/// MemoryStore
///
/// In-process store. Documents are kept CBOR-encoded, ordered by the
/// CBOR encoding of their identity.
///

type Collection = BTreeMap<Vec<u8>, Vec<u8>>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    config: StoreConfig,
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            collections: RwLock::default(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn with_read<R>(
        &self,
        f: impl FnOnce(&HashMap<String, Collection>) -> R,
    ) -> Result<R, StoreError> {
        let guard = self.collections.read().map_err(|_| StoreError::Poisoned)?;

        Ok(f(&guard))
    }

    fn with_write<R>(
        &self,
        f: impl FnOnce(&mut HashMap<String, Collection>) -> R,
    ) -> Result<R, StoreError> {
        let mut guard = self.collections.write().map_err(|_| StoreError::Poisoned)?;

        Ok(f(&mut guard))
    }

    fn decode_row(&self, bytes: &[u8]) -> Result<Document, StoreError> {
        deserialize_bounded(bytes, self.config.max_document_bytes).map_err(StoreError::from)
    }
}

impl DocumentStore for MemoryStore {
    fn replace(
        &self,
        collection: &str,
        id: &Value,
        document: &Document,
    ) -> Result<(), StoreError> {
        let key = serialize(id)?;
        let row = serialize(document)?;

        let max_bytes = self.config.max_document_bytes;
        if row.len() > max_bytes {
            return Err(StoreError::DocumentTooLarge {
                len: row.len(),
                max_bytes,
            });
        }

        self.with_write(|collections| {
            collections
                .entry(collection.to_string())
                .or_default()
                .insert(key, row);
        })
    }

    fn find(&self, collection: &str, id: &Value) -> Result<Option<Document>, StoreError> {
        let key = serialize(id)?;
        let row = self.with_read(|collections| {
            collections
                .get(collection)
                .and_then(|rows| rows.get(&key))
                .cloned()
        })?;

        row.map(|bytes| self.decode_row(&bytes)).transpose()
    }

    fn scan(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows = self.with_read(|collections| {
            collections
                .get(collection)
                .map(|rows| rows.values().cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        })?;

        rows.iter().map(|bytes| self.decode_row(bytes)).collect()
    }

    fn count(&self, collection: &str) -> Result<usize, StoreError> {
        self.with_read(|collections| collections.get(collection).map_or(0, BTreeMap::len))
    }

    fn delete(&self, collection: &str, id: &Value) -> Result<bool, StoreError> {
        let key = serialize(id)?;

        self.with_write(|collections| {
            collections
                .get_mut(collection)
                .and_then(|rows| rows.remove(&key))
                .is_some()
        })
    }

    fn clear(&self, collection: &str) -> Result<usize, StoreError> {
        self.with_write(|collections| collections.remove(collection).map_or(0, |rows| rows.len()))
    }
}
