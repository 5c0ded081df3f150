//! Key-value storage protocol.

use async_trait::async_trait;

use crate::error::PersistenceError;

/// Durable text storage addressed by a fixed key.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Remove `key`. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> Result<(), PersistenceError>;
}
