use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::RecordStore;
use crate::shared::AppError;

/// In-memory implementation of RecordStore for development and testing
///
/// Data is kept as the same JSON text the file store would write, so decoding
/// paths are exercised identically. Everything is lost when the process exits.
pub struct InMemoryRecordStore {
    records: Mutex<HashMap<String, String>>,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecordStore {
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Returns true if something is stored under `key`
    pub fn has_key(&self, key: &str) -> bool {
        self.lock().map(|r| r.contains_key(key)).unwrap_or(false)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.records
            .lock()
            .map_err(|_| AppError::Storage("record store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    #[instrument(skip(self, value))]
    async fn save(&self, key: &str, value: String) -> Result<(), AppError> {
        debug!(key, bytes = value.len(), "Saving record in memory");
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        let value = self.lock()?.get(key).cloned();
        debug!(key, found = value.is_some(), "Loaded record from memory");
        Ok(value)
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> Result<(), AppError> {
        debug!(key, "Deleting record from memory");
        self.lock()?.remove(key);
        Ok(())
    }
}
