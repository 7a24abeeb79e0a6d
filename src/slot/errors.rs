//! # Slot Errors

use std::io;

use thiserror::Error;

/// Result type for slot operations
pub type SlotResult<T> = Result<T, SlotError>;

/// Backing-store errors. None of these is fatal to the ledger.
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("Invalid slot key: {0:?}")]
    InvalidKey(String),

    #[error("Slot quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("Slot read failed for '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Slot write failed for '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Slot backend unavailable: {0}")]
    Unavailable(String),
}

impl SlotError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SlotError::InvalidKey(_) => "STOCKROOM_SLOT_INVALID_KEY",
            SlotError::QuotaExceeded { .. } => "STOCKROOM_SLOT_QUOTA_EXCEEDED",
            SlotError::Read { .. } => "STOCKROOM_SLOT_READ_FAILED",
            SlotError::Write { .. } => "STOCKROOM_SLOT_WRITE_FAILED",
            SlotError::Unavailable(_) => "STOCKROOM_SLOT_UNAVAILABLE",
        }
    }
}
