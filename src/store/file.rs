use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

use super::RecordStore;
use crate::shared::AppError;

/// Record store keeping one `<key>.json` file per collection under a directory.
///
/// Every save overwrites the whole file. The new content is written to a
/// sibling temp file first and renamed over the old one.
pub struct JsonFileRecordStore {
    root: PathBuf,
}

impl JsonFileRecordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

fn storage_error(action: &str, path: &Path, error: std::io::Error) -> AppError {
    warn!(path = %path.display(), error = %error, "Failed to {} record file", action);
    AppError::Storage(format!("{action} {}: {error}", path.display()))
}

#[async_trait]
impl RecordStore for JsonFileRecordStore {
    #[instrument(skip(self, value))]
    async fn save(&self, key: &str, value: String) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| storage_error("create", &self.root, e))?;

        let path = self.path_for(key);
        let staging = self.root.join(format!(".{key}.json.tmp"));

        tokio::fs::write(&staging, value.as_bytes())
            .await
            .map_err(|e| storage_error("write", &staging, e))?;
        tokio::fs::rename(&staging, &path)
            .await
            .map_err(|e| storage_error("replace", &path, e))?;

        debug!(path = %path.display(), bytes = value.len(), "Record file written");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "Record file read");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Record file does not exist");
                Ok(None)
            }
            Err(e) => Err(storage_error("read", &path, e)),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!(path = %path.display(), "Record file deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("delete", &path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("priceguesser-store-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_round_trip_through_disk() {
        let dir = scratch_dir();
        let store = JsonFileRecordStore::new(&dir);

        assert!(store.load("savedPlayers").await.unwrap().is_none());

        store
            .save("savedPlayers", "[]".to_string())
            .await
            .unwrap();
        assert!(dir.join("savedPlayers.json").exists());
        assert_eq!(
            store.load("savedPlayers").await.unwrap().as_deref(),
            Some("[]")
        );

        store.delete("savedPlayers").await.unwrap();
        assert!(store.load("savedPlayers").await.unwrap().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_file() {
        let dir = scratch_dir();
        let store = JsonFileRecordStore::new(&dir);

        store.save("gameHistory", "[1]".to_string()).await.unwrap();
        store.save("gameHistory", "[1,2]".to_string()).await.unwrap();

        assert_eq!(
            store.load("gameHistory").await.unwrap().as_deref(),
            Some("[1,2]")
        );
        assert!(!dir.join(".gameHistory.json.tmp").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_noop() {
        let store = JsonFileRecordStore::new(scratch_dir());
        assert!(store.delete("nothing").await.is_ok());
    }
}
