use super::*;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tourguide_protocols::ImageDataUrl;

#[derive(Default)]
struct FakeStorage {
    values: parking_lot::Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl FakeStorage {
    fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn put_raw(&self, key: &str, value: &str) {
        self.values.lock().insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl KeyValueStorage for FakeStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PersistenceError::Unavailable("read disabled".to_string()));
        }
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.put_raw(key, value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        self.values.lock().remove(key);
        Ok(())
    }
}

fn image(n: usize) -> ImageDataUrl {
    ImageDataUrl::new("image/jpeg", &format!("img{}", n))
}

fn store() -> (Arc<FakeStorage>, HistoryStore) {
    let storage = Arc::new(FakeStorage::default());
    let store = HistoryStore::new(storage.clone());
    (storage, store)
}

#[tokio::test]
async fn test_load_empty() {
    let (_, store) = store();
    assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn test_append_then_load_roundtrip() {
    let (_, store) = store();
    store
        .append(NewHistoryRecord::described(image(0), "First"))
        .await;
    let returned = store
        .append(NewHistoryRecord::described(image(1), "Second"))
        .await;

    let loaded = store.load().await;
    assert_eq!(loaded, returned);
    let last = loaded.last().unwrap();
    assert_eq!(last.image_data_url, image(1));
    assert_eq!(last.description.as_deref(), Some("Second"));
    assert!(!last.id.is_empty());
}

#[tokio::test]
async fn test_append_generates_unique_ids() {
    let (_, store) = store();
    store.append(NewHistoryRecord::pending(image(0))).await;
    let history = store.append(NewHistoryRecord::pending(image(0))).await;
    assert_eq!(history.len(), 2);
    assert_ne!(history[0].id, history[1].id);
}

#[tokio::test]
async fn test_append_evicts_oldest_beyond_cap() {
    let (_, store) = store();
    let total = MAX_HISTORY_ITEMS + 7;
    let mut last = Vec::new();
    for n in 0..total {
        last = store
            .append(NewHistoryRecord::described(image(n), format!("d{}", n)))
            .await;
    }

    assert_eq!(last.len(), MAX_HISTORY_ITEMS);
    assert_eq!(last[0].image_data_url, image(7));
    assert_eq!(last.last().unwrap().image_data_url, image(total - 1));
    for (offset, record) in last.iter().enumerate() {
        assert_eq!(record.description.as_deref(), Some(format!("d{}", offset + 7).as_str()));
    }
    assert_eq!(store.load().await, last);
}

#[tokio::test]
async fn test_update_description_only_touches_match() {
    let (_, store) = store();
    store
        .append(NewHistoryRecord::described(image(0), "Kept"))
        .await;
    store.append(NewHistoryRecord::pending(image(1))).await;
    let before = store.append(NewHistoryRecord::pending(image(2))).await;

    let target = before[1].id.clone();
    let after = store.update_description(&target, "Now described").await;

    assert_eq!(after.len(), 3);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].id, target);
    assert_eq!(after[1].image_data_url, before[1].image_data_url);
    assert_eq!(after[1].description.as_deref(), Some("Now described"));
    assert_eq!(store.load().await, after);
}

#[tokio::test]
async fn test_update_description_unknown_id_is_noop() {
    let (storage, store) = store();
    let before = store
        .append(NewHistoryRecord::described(image(0), "Only"))
        .await;
    let writes = storage.writes.load(Ordering::SeqCst);

    let after = store.update_description("missing", "ignored").await;

    assert_eq!(after, before);
    assert_eq!(storage.writes.load(Ordering::SeqCst), writes);
}

#[tokio::test]
async fn test_corrupt_payload_is_discarded() {
    let (storage, store) = store();
    storage.put_raw(STORAGE_KEY, "{not json");

    assert!(store.load().await.is_empty());
    assert!(storage.raw(STORAGE_KEY).is_none());
}

#[tokio::test]
async fn test_wrong_shape_payload_is_discarded() {
    let (storage, store) = store();
    storage.put_raw(STORAGE_KEY, r#"{"id": "not-an-array"}"#);

    assert!(store.load().await.is_empty());
    assert!(storage.raw(STORAGE_KEY).is_none());
}

#[tokio::test]
async fn test_append_after_corrupt_payload_starts_fresh() {
    let (storage, store) = store();
    storage.put_raw(STORAGE_KEY, "garbage");

    let history = store.append(NewHistoryRecord::pending(image(0))).await;
    assert_eq!(history.len(), 1);
    assert_eq!(store.load().await, history);
}

#[tokio::test]
async fn test_write_failure_still_returns_sequence() {
    let (storage, store) = store();
    store
        .append(NewHistoryRecord::described(image(0), "Persisted"))
        .await;
    storage.fail_writes.store(true, Ordering::SeqCst);

    let history = store.append(NewHistoryRecord::pending(image(1))).await;

    assert_eq!(history.len(), 2);
    // Storage still holds the last successful write.
    assert_eq!(store.load().await.len(), 1);
}

#[tokio::test]
async fn test_read_failure_continues_from_snapshot_without_writing() {
    let (storage, store) = store();
    store
        .append(NewHistoryRecord::described(image(0), "Persisted"))
        .await;
    let writes = storage.writes.load(Ordering::SeqCst);
    storage.fail_reads.store(true, Ordering::SeqCst);

    let history = store.append(NewHistoryRecord::pending(image(1))).await;
    assert_eq!(history.len(), 2);
    assert_eq!(storage.writes.load(Ordering::SeqCst), writes);

    storage.fail_reads.store(false, Ordering::SeqCst);
    assert_eq!(store.load().await.len(), 1);
}

#[tokio::test]
async fn test_load_read_failure_returns_empty() {
    let (storage, store) = store();
    storage.fail_reads.store(true, Ordering::SeqCst);
    assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn test_persisted_payload_uses_camel_case_keys() {
    let (storage, store) = store();
    store.append(NewHistoryRecord::pending(image(0))).await;

    let raw = storage.raw(STORAGE_KEY).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(json.is_array());
    assert!(json[0]["imageDataUrl"].is_string());
    assert!(json[0]["description"].is_null());
}

#[tokio::test]
async fn test_custom_key() {
    let storage = Arc::new(FakeStorage::default());
    let store = HistoryStore::with_key(storage.clone(), "other");
    store.append(NewHistoryRecord::pending(image(0))).await;
    assert!(storage.raw("other").is_some());
    assert!(storage.raw(STORAGE_KEY).is_none());
}
