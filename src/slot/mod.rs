//! Persisted key-value slots
//!
//! The ledger persists its whole collection as one text blob under one
//! named key. This module abstracts where that blob lives.
//!
//! # Backends
//!
//! - `FileSlotStore`: one file per key, atomic replace on save
//! - `MemorySlotStore`: process memory, optional byte quota
//!
//! Keys are restricted to `[A-Za-z0-9_.-]` and may not start with `.`, so a
//! key can always be used as a file stem.

mod errors;
mod file;
mod memory;

pub use errors::{SlotError, SlotResult};
pub use file::FileSlotStore;
pub use memory::MemorySlotStore;

/// A key-value backing store for persisted blobs.
pub trait SlotStore {
    /// Reads the blob stored under `key`, `None` if absent.
    fn load(&self, key: &str) -> SlotResult<Option<String>>;

    /// Replaces the blob stored under `key`.
    fn save(&mut self, key: &str, value: &str) -> SlotResult<()>;

    /// Deletes `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> SlotResult<()>;
}

/// Checks that `key` is usable by every backend.
pub fn validate_key(key: &str) -> SlotResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(SlotError::InvalidKey(key.to_string()))
    }
}
