//! Unified error handling for store operations.
//!
//! Reads never fail: an absent or corrupt slot degrades to an empty
//! collection (logged, not surfaced). Writes do fail - the backing file may be
//! unwritable - so every mutation returns `Result<T, StoreError>`.

use thiserror::Error;

use crate::storage::StorageError;

/// Store-level error type.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend rejected a read or write.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A collection could not be serialized for persistence.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
