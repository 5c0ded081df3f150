//! In-memory key-value storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tourguide_protocols::{KeyValueStorage, PersistenceError};

/// Values live only as long as the process.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
