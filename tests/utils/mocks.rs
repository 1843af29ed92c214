use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use priceguesser::{AppError, InMemoryRecordStore, RecordStore};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// In-memory store whose writes to selected keys can be made to fail.
pub struct FailingRecordStore {
    inner: InMemoryRecordStore,
    failing_keys: Mutex<HashSet<String>>,
}

impl FailingRecordStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryRecordStore::new(),
            failing_keys: Mutex::new(HashSet::new()),
        }
    }

    pub fn fail_writes_to(&self, key: &str) {
        self.failing_keys.lock().unwrap().insert(key.to_string());
    }

    pub fn heal(&self) {
        self.failing_keys.lock().unwrap().clear();
    }

    fn should_fail(&self, key: &str) -> bool {
        self.failing_keys.lock().unwrap().contains(key)
    }
}

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn save(&self, key: &str, value: String) -> Result<(), AppError> {
        if self.should_fail(key) {
            return Err(AppError::Storage(format!("injected write failure for {key}")));
        }
        self.inner.save(key, value).await
    }

    async fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        self.inner.load(key).await
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        if self.should_fail(key) {
            return Err(AppError::Storage(format!("injected delete failure for {key}")));
        }
        self.inner.delete(key).await
    }
}

/// In-memory store that yields to the runtime around every call, so
/// concurrent tasks interleave at each storage round-trip.
pub struct YieldingRecordStore {
    inner: InMemoryRecordStore,
}

impl YieldingRecordStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryRecordStore::new(),
        }
    }
}

#[async_trait]
impl RecordStore for YieldingRecordStore {
    async fn save(&self, key: &str, value: String) -> Result<(), AppError> {
        tokio::task::yield_now().await;
        self.inner.save(key, value).await
    }

    async fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        tokio::task::yield_now().await;
        self.inner.load(key).await
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        tokio::task::yield_now().await;
        self.inner.delete(key).await
    }
}
