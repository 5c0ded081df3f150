//! Key-value storage errors.
//!
//! These never leave the history store; they are logged and recovered there.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to read '{key}': {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("Failed to remove '{key}': {reason}")]
    Remove { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
