//! Persistent capture history.
//!
//! The whole history is one JSON array stored under [`STORAGE_KEY`]. Every
//! mutation reads the persisted array, applies the change, writes it back and
//! returns the full post-mutation snapshot, which callers use to replace their
//! in-memory copy.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use tourguide_protocols::{HistoryRecord, KeyValueStorage, NewHistoryRecord, PersistenceError};

use crate::constants::{MAX_HISTORY_ITEMS, STORAGE_KEY};

/// Bounded, ordered, persisted log of captures.
///
/// Storage failures never reach the caller: they are logged and the computed
/// sequence is returned so the session can carry on in memory.
pub struct HistoryStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    /// Serializes read-modify-write cycles. Holds the last sequence seen, used
    /// when storage cannot be read.
    last_snapshot: Mutex<Vec<HistoryRecord>>,
}

impl HistoryStore {
    /// Create a store over `storage` using the default key.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            last_snapshot: Mutex::new(Vec::new()),
        }
    }

    /// The full persisted history, oldest first.
    ///
    /// Missing or corrupt data yields an empty history; a corrupt payload is
    /// removed from storage.
    pub async fn load(&self) -> Vec<HistoryRecord> {
        let mut snapshot = self.last_snapshot.lock().await;
        match self.read().await {
            Ok(history) => {
                *snapshot = history.clone();
                history
            }
            Err(e) => {
                warn!("Failed to read history: {}", e);
                Vec::new()
            }
        }
    }

    /// Append a record with a freshly generated id, evicting the oldest
    /// records beyond [`MAX_HISTORY_ITEMS`].
    pub async fn append(&self, record: NewHistoryRecord) -> Vec<HistoryRecord> {
        let mut snapshot = self.last_snapshot.lock().await;
        let (mut history, readable) = self.read_or_fallback(&snapshot).await;

        let record = record.with_id(uuid::Uuid::new_v4().to_string());
        debug!(
            "Appending history record {} (pending: {})",
            record.id,
            record.is_pending()
        );
        history.push(record);

        if history.len() > MAX_HISTORY_ITEMS {
            let excess = history.len() - MAX_HISTORY_ITEMS;
            history.drain(..excess);
            debug!("Evicted {} oldest history record(s)", excess);
        }

        if readable {
            self.persist(&history).await;
        }
        *snapshot = history.clone();
        history
    }

    /// Replace the description of the record with `id`.
    ///
    /// Unknown ids leave the history untouched and nothing is written.
    pub async fn update_description(
        &self,
        id: &str,
        description: impl Into<String>,
    ) -> Vec<HistoryRecord> {
        let mut snapshot = self.last_snapshot.lock().await;
        let (mut history, readable) = self.read_or_fallback(&snapshot).await;

        let Some(record) = history.iter_mut().find(|r| r.id == id) else {
            debug!("No history record with id {}; nothing to update", id);
            *snapshot = history.clone();
            return history;
        };
        record.description = Some(description.into());

        if readable {
            self.persist(&history).await;
        }
        *snapshot = history.clone();
        history
    }

    /// Read the persisted history, discarding a corrupt payload.
    async fn read(&self) -> Result<Vec<HistoryRecord>, PersistenceError> {
        let Some(payload) = self.storage.get(&self.key).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<HistoryRecord>>(&payload) {
            Ok(history) => Ok(history),
            Err(e) => {
                warn!("Discarding corrupt history payload: {}", e);
                if let Err(e) = self.storage.remove(&self.key).await {
                    warn!("Failed to remove corrupt history payload: {}", e);
                }
                Ok(Vec::new())
            }
        }
    }

    /// Read for a mutation. When storage is unreadable, continue from the last
    /// snapshot and report that the result must not be written back, so
    /// records we could not see are never overwritten.
    async fn read_or_fallback(&self, snapshot: &[HistoryRecord]) -> (Vec<HistoryRecord>, bool) {
        match self.read().await {
            Ok(history) => (history, true),
            Err(e) => {
                warn!("Failed to read history, continuing in memory: {}", e);
                (snapshot.to_vec(), false)
            }
        }
    }

    async fn persist(&self, history: &[HistoryRecord]) {
        let payload = match serde_json::to_string(history) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("{}", PersistenceError::Serialization(e.to_string()));
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, &payload).await {
            warn!("Failed to save history: {}", e);
        }
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
