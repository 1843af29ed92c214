use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::shared::AppError;
use crate::store::{keys, RecordStore};

/// Source of ids for new games.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Plain random v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Ids that stay unique when data from several installations is merged.
///
/// Every installation keeps one persistent device UUID. An id is the first
/// 16 bytes of `SHA-256("{device}-{unix nanos}-{random u128}")`.
#[derive(Debug, Clone)]
pub struct DeviceScopedIdGenerator {
    device_id: Uuid,
}

impl DeviceScopedIdGenerator {
    pub fn with_device(device_id: Uuid) -> Self {
        Self { device_id }
    }

    /// Reads the installation UUID from `store`, creating and saving one on
    /// first use. An unreadable stored value is replaced.
    #[instrument(skip(store))]
    pub async fn load_or_create(store: &dyn RecordStore) -> Result<Self, AppError> {
        if let Some(raw) = store.load(keys::DEVICE_IDENTIFIER).await? {
            match serde_json::from_str::<Uuid>(&raw) {
                Ok(device_id) => return Ok(Self::with_device(device_id)),
                Err(e) => warn!(error = %e, "Stored device identifier is unreadable, replacing it"),
            }
        }

        let device_id = Uuid::new_v4();
        let encoded = serde_json::to_string(&device_id)
            .map_err(|e| AppError::EncodingFailed(e.to_string()))?;
        store.save(keys::DEVICE_IDENTIFIER, encoded).await?;

        info!(device_id = %device_id, "Created device identifier");
        Ok(Self::with_device(device_id))
    }

    pub fn device_id(&self) -> Uuid {
        self.device_id
    }

    fn derive(&self, nanos: i64, random: u128) -> Uuid {
        let seed = format!("{}-{}-{}", self.device_id, nanos, random);
        let digest = Sha256::digest(seed.as_bytes());

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Uuid::from_bytes(bytes)
    }
}

impl IdGenerator for DeviceScopedIdGenerator {
    fn generate(&self) -> Uuid {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        self.derive(nanos, rand::random::<u128>())
    }
}
