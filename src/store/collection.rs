use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, RwLock};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::{load_collection, save_collection, RecordStore};
use crate::shared::AppError;

/// Where a newly saved record goes before the canonical sort runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Appended at the tail (name-ordered collections)
    Append,
    /// Inserted at the head (newest-first collections)
    Prepend,
}

/// A record persisted as part of one whole collection in a RecordStore.
pub trait StoredRecord: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Storage key of the collection
    const KEY: &'static str;
    /// Human readable entity name used in errors and logs
    const ENTITY: &'static str;
    const PLACEMENT: Placement;

    fn record_id(&self) -> Uuid;

    /// Applies the collection's canonical order. Must be a stable sort.
    fn sort(items: &mut [Self]);
}

/// Cached, ordered CRUD over one collection.
///
/// The cache is filled on first read and replaced only after a write to the
/// store succeeds, so a failed write leaves the in-memory view untouched.
/// Read-modify-write cycles are serialized by `write_lock`.
pub struct CollectionRepository<T: StoredRecord> {
    store: Arc<dyn RecordStore>,
    cache: RwLock<Option<Vec<T>>>,
    write_lock: AsyncMutex<()>,
}

impl<T: StoredRecord> CollectionRepository<T> {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            cache: RwLock::new(None),
            write_lock: AsyncMutex::new(()),
        }
    }

    /// All records in canonical order, from the cache when populated.
    #[instrument(skip(self), fields(entity = T::ENTITY))]
    pub async fn get_all(&self) -> Result<Vec<T>, AppError> {
        {
            let cache = self.cache.read().await;
            if let Some(items) = cache.as_ref() {
                debug!(count = items.len(), "Loaded collection from cache");
                return Ok(items.clone());
            }
        }

        let mut cache = self.cache.write().await;
        if let Some(items) = cache.as_ref() {
            return Ok(items.clone());
        }

        let mut items: Vec<T> = load_collection(self.store.as_ref(), T::KEY)
            .await?
            .unwrap_or_default();
        T::sort(&mut items);

        info!(count = items.len(), "Loaded collection from store");
        *cache = Some(items.clone());
        Ok(items)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<T>, AppError> {
        let items = self.get_all().await?;
        Ok(items.into_iter().find(|item| item.record_id() == id))
    }

    #[instrument(skip(self, item), fields(entity = T::ENTITY, id = %item.record_id()))]
    pub async fn save(&self, item: T) -> Result<(), AppError> {
        self.save_all(vec![item]).await
    }

    /// Adds several records with a single write.
    #[instrument(skip(self, new_items), fields(entity = T::ENTITY, count = new_items.len()))]
    pub async fn save_all(&self, new_items: Vec<T>) -> Result<(), AppError> {
        if new_items.is_empty() {
            return Ok(());
        }

        let _guard = self.write_lock.lock().await;
        let mut items = self.get_all().await?;

        match T::PLACEMENT {
            Placement::Append => items.extend(new_items),
            Placement::Prepend => {
                let mut merged = new_items;
                merged.extend(items);
                items = merged;
            }
        }

        self.commit(items).await
    }

    /// Replaces the record with the same id.
    #[instrument(skip(self, item), fields(entity = T::ENTITY, id = %item.record_id()))]
    pub async fn update(&self, item: T) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.get_all().await?;

        let id = item.record_id();
        let Some(index) = items.iter().position(|existing| existing.record_id() == id) else {
            warn!("Record not found for update");
            return Err(AppError::NotFound {
                entity: T::ENTITY,
                id,
            });
        };

        items[index] = item;
        self.commit(items).await
    }

    /// Removes the record with `id`. Absent ids are ignored.
    #[instrument(skip(self), fields(entity = T::ENTITY))]
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.get_all().await?;

        let before = items.len();
        items.retain(|item| item.record_id() != id);
        if items.len() == before {
            debug!(%id, "Nothing to delete");
            return Ok(());
        }

        self.commit(items).await
    }

    /// Drops the cache so the next read goes back to the store.
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }

    async fn commit(&self, mut items: Vec<T>) -> Result<(), AppError> {
        T::sort(&mut items);
        save_collection(self.store.as_ref(), T::KEY, &items).await?;

        info!(count = items.len(), "Saved collection");
        *self.cache.write().await = Some(items);
        Ok(())
    }
}
