//! The persistence port: named string slots behind a small trait.
//!
//! The browser original mirrored each collection into a local storage key
//! (`aura_cart`, `aura_wishlist`) as JSON text. Here that surface is an
//! explicit capability - [`StorageBackend`] - so stores can be tested against
//! an in-memory fake and shipped against a file-per-slot backend.
//!
//! Access is synchronous read-then-write from a single thread of user
//! actions. There is no locking between processes: the last writer wins,
//! exactly as two browser tabs would behave.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Slot name for the shopping bag collection.
pub const CART_SLOT: &str = "aura_cart";

/// Slot name for the wishlist collection.
pub const WISHLIST_SLOT: &str = "aura_wishlist";

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written.
    #[error("slot {slot:?}: {source}")]
    Io {
        slot: String,
        #[source]
        source: std::io::Error,
    },
}

/// A named-slot string store.
///
/// Each slot holds one UTF-8 text value (the JSON encoding of a collection).
/// Reading an absent slot yields `None`; writing replaces the whole value.
pub trait StorageBackend: Send + Sync {
    /// Read the current value of a slot, if present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the slot exists but cannot be read.
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value of a slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the value cannot be written.
    fn write(&self, slot: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing an absent slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the slot exists but cannot be removed.
    fn remove(&self, slot: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(slot).cloned())
    }

    fn write(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.remove(slot);
        Ok(())
    }
}

/// File-per-slot backend: each slot lives at `<dir>/<slot>.json`.
///
/// This is the local-storage stand-in for the CLI. Writes are plain
/// whole-file replacements with no cross-process coordination.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            slot: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }

    /// The directory holding the slot files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.slot_path(slot)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                slot: slot.to_string(),
                source,
            }),
        }
    }

    fn write(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.slot_path(slot), value).map_err(|source| StorageError::Io {
            slot: slot.to_string(),
            source,
        })
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                slot: slot.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert!(backend.read("missing").unwrap().is_none());

        backend.write("slot", "[1,2,3]").unwrap();
        assert_eq!(backend.read("slot").unwrap().as_deref(), Some("[1,2,3]"));

        backend.remove("slot").unwrap();
        assert!(backend.read("slot").unwrap().is_none());
    }

    #[test]
    fn test_memory_backend_last_writer_wins() {
        let backend = MemoryBackend::new();
        backend.write("slot", "first").unwrap();
        backend.write("slot", "second").unwrap();
        assert_eq!(backend.read("slot").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_file_backend_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        assert!(backend.read(CART_SLOT).unwrap().is_none());
        backend.write(CART_SLOT, "[]").unwrap();
        assert_eq!(backend.read(CART_SLOT).unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("aura_cart.json").exists());

        backend.remove(CART_SLOT).unwrap();
        assert!(backend.read(CART_SLOT).unwrap().is_none());
        // Removing again is fine
        backend.remove(CART_SLOT).unwrap();
    }

    #[test]
    fn test_file_backend_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state").join("aura");
        let backend = FileBackend::open(&nested).unwrap();
        backend.write(WISHLIST_SLOT, "[]").unwrap();
        assert!(nested.join("aura_wishlist.json").exists());
    }
}
