use crate::{
    db::{DocumentStore, RepositoryError},
    mapper::{decode, encode},
    traits::{DocumentValue, Entity},
    types::Timestamp,
};
use std::marker::PhantomData;
use tracing::{debug, warn};

///
/// Repository
///
/// Typed access to one collection of a document store.
///

pub struct Repository<E, S> {
    store: S,
    collection: String,
    _marker: PhantomData<fn() -> E>,
}

impl<E, S> Repository<E, S>
where
    E: Entity,
    S: DocumentStore,
{
    /// Bind to the collection declared on the entity (`#[entity(collection = "...")]`).
    pub fn new(store: S) -> Result<Self, RepositoryError> {
        let model = E::MODEL;
        let collection = model
            .collection
            .ok_or(RepositoryError::MissingCollection(model.path))?;

        Ok(Self::with_collection(store, collection))
    }

    /// Bind to an explicitly named collection.
    pub fn with_collection(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Insert or replace an entity, stamping its timestamps with the current time.
    pub fn save(&self, entity: &mut E) -> Result<(), RepositoryError> {
        self.save_at(entity, Timestamp::now())
    }

    /// Insert or replace an entity, stamping its timestamps with `now`.
    pub fn save_at(&self, entity: &mut E, now: Timestamp) -> Result<(), RepositoryError> {
        E::MODEL.check_keys()?;

        if let Some(timestamps) = entity.timestamps_mut() {
            timestamps.touch(now);
        }

        let document = encode(entity);
        let Some(id) = document.id().cloned() else {
            warn!(
                collection = %self.collection,
                entity = E::MODEL.path,
                "rejected write without identity"
            );
            return Err(RepositoryError::MissingIdentity(E::MODEL.path));
        };

        debug!(collection = %self.collection, %id, %document, "saving document");
        self.store.replace(&self.collection, &id, &document)?;

        Ok(())
    }

    pub fn find_by_id<I: DocumentValue>(&self, id: &I) -> Result<Option<E>, RepositoryError> {
        let id = id.to_value();
        let Some(document) = self.store.find(&self.collection, &id)? else {
            return Ok(None);
        };

        Ok(Some(decode(&document)?))
    }

    /// Every entity in the collection, in identity order.
    pub fn find_all(&self) -> Result<Vec<E>, RepositoryError> {
        self.store
            .scan(&self.collection)?
            .iter()
            .map(|document| decode(document).map_err(RepositoryError::from))
            .collect()
    }

    pub fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.store.count(&self.collection)?)
    }

    pub fn exists_by_id<I: DocumentValue>(&self, id: &I) -> Result<bool, RepositoryError> {
        let id = id.to_value();

        Ok(self.store.find(&self.collection, &id)?.is_some())
    }

    /// Returns whether a document was removed.
    pub fn delete_by_id<I: DocumentValue>(&self, id: &I) -> Result<bool, RepositoryError> {
        let id = id.to_value();
        let deleted = self.store.delete(&self.collection, &id)?;
        debug!(collection = %self.collection, %id, deleted, "delete by id");

        Ok(deleted)
    }

    /// Returns how many documents were removed.
    pub fn delete_all(&self) -> Result<usize, RepositoryError> {
        let deleted = self.store.clear(&self.collection)?;
        debug!(collection = %self.collection, deleted, "delete all");

        Ok(deleted)
    }
}
