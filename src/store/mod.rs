pub mod collection;
pub mod file;
pub mod memory;

pub use collection::{CollectionRepository, Placement, StoredRecord};
pub use file::JsonFileRecordStore;
pub use memory::InMemoryRecordStore;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use crate::shared::AppError;

/// Storage keys, one per persisted collection.
pub mod keys {
    pub const PLAYERS: &str = "savedPlayers";
    pub const RESTAURANTS: &str = "savedRestaurants";
    pub const GAME_HISTORY: &str = "gameHistory";
    pub const GROUPS: &str = "savedGroups";
    pub const ACHIEVEMENTS: &str = "playerAchievements";
    pub const DEVICE_IDENTIFIER: &str = "deviceIdentifier";
}

/// Durable key-value storage of whole serialized collections.
///
/// Values are opaque JSON documents; there is no per-record addressing.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn save(&self, key: &str, value: String) -> Result<(), AppError>;
    async fn load(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

/// Serializes `items` and writes them under `key`, replacing what was there.
pub async fn save_collection<T: Serialize>(
    store: &dyn RecordStore,
    key: &str,
    items: &[T],
) -> Result<(), AppError> {
    let encoded = serde_json::to_string(items).map_err(|e| {
        error!(key, error = %e, "Failed to encode collection");
        AppError::EncodingFailed(e.to_string())
    })?;

    store.save(key, encoded).await?;
    debug!(key, count = items.len(), "Collection saved");
    Ok(())
}

/// Reads the collection stored under `key`; `None` when nothing was ever saved.
pub async fn load_collection<T: DeserializeOwned>(
    store: &dyn RecordStore,
    key: &str,
) -> Result<Option<Vec<T>>, AppError> {
    let Some(raw) = store.load(key).await? else {
        debug!(key, "No stored collection");
        return Ok(None);
    };

    let items: Vec<T> = serde_json::from_str(&raw).map_err(|e| {
        error!(key, error = %e, "Failed to decode collection");
        AppError::DecodingFailed(e.to_string())
    })?;

    debug!(key, count = items.len(), "Collection loaded");
    Ok(Some(items))
}
