//! File-backed key-value storage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use tourguide_protocols::{KeyValueStorage, PersistenceError};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// reader never observes a half-written value.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating it if needed.
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let dir = dir.as_ref().to_path_buf();

        if !fs::try_exists(&dir).await.unwrap_or(false) {
            fs::create_dir_all(&dir).await.map_err(|e| {
                PersistenceError::Unavailable(format!("{}: {}", dir.display(), e))
            })?;
            info!("Created storage directory: {:?}", dir);
        }

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

/// Map a key onto a safe file stem.
fn sanitize_key(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() { "_".to_string() } else { stem }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.key_path(key);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Read {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.key_path(key);
        let tmp = path.with_extension(format!("json.{}.tmp", std::process::id()));
        let write_err = |e: std::io::Error| PersistenceError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };

        fs::write(&tmp, value).await.map_err(write_err)?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(write_err(e));
        }

        debug!("Saved {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        let path = self.key_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Deleted {:?}", path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::Remove {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
