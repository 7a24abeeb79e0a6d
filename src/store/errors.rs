//! # Record Store Errors
//!
//! Only explicit persistence (`RecordStore::flush`) surfaces these to a
//! caller. Mutations log them and carry on.

use thiserror::Error;

use crate::model::RecordId;
use crate::slot::SlotError;

/// Result type for store persistence
pub type StoreResult<T> = Result<T, StoreError>;

/// Problems turning the collection into a blob and back
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot is not a valid record array: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Snapshot contains duplicate record id {0}")]
    DuplicateId(RecordId),

    #[error("Record {0} has a non-finite unit price")]
    NonFinitePrice(RecordId),

    #[error("Snapshot encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Persistence failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Slot(#[from] SlotError),
}

impl StoreError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Snapshot(_) => "STOCKROOM_SNAPSHOT_INVALID",
            StoreError::Slot(e) => e.code(),
        }
    }
}
