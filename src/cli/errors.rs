//! CLI-specific error types
//!
//! Every CLI error ends the command with a non-zero exit status and one
//! `{"status":"error",...}` line on stdout.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::model::{RecordId, ValidationError};
use crate::slot::SlotError;
use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout)
    IoError,
    /// Slot already holds a collection
    AlreadyInitialized,
    /// Draft or patch rejected at the write boundary
    ValidationFailed,
    /// No record with the given id
    NotFound,
    /// The change could not be written to the slot
    PersistFailed,
    /// The slot could not be opened or read
    SlotUnavailable,
    /// Every record id has been handed out
    IdsExhausted,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "STOCKROOM_CONFIG_ERROR",
            Self::IoError => "STOCKROOM_CLI_IO_ERROR",
            Self::AlreadyInitialized => "STOCKROOM_ALREADY_INITIALIZED",
            Self::ValidationFailed => "STOCKROOM_VALIDATION_FAILED",
            Self::NotFound => "STOCKROOM_NOT_FOUND",
            Self::PersistFailed => "STOCKROOM_PERSIST_FAILED",
            Self::SlotUnavailable => "STOCKROOM_SLOT_UNAVAILABLE",
            Self::IdsExhausted => "STOCKROOM_IDS_EXHAUSTED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn already_initialized(slot: &str) -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            format!("Slot '{}' already holds an inventory", slot),
        )
    }

    pub fn not_found(id: RecordId) -> Self {
        Self::new(CliErrorCode::NotFound, format!("No record with id {}", id))
    }

    pub fn persist_failed(slot: &str) -> Self {
        Self::new(
            CliErrorCode::PersistFailed,
            format!("Change applied in memory but slot '{}' was not written", slot),
        )
    }

    pub fn ids_exhausted(slot: &str) -> Self {
        Self::new(
            CliErrorCode::IdsExhausted,
            format!("Slot '{}' has no record ids left to assign", slot),
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(CliErrorCode::ConfigError, e.to_string())
    }
}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        Self::new(CliErrorCode::ValidationFailed, e.to_string())
    }
}

/// Bare slot errors only come from opening or reading the slot.
impl From<SlotError> for CliError {
    fn from(e: SlotError) -> Self {
        Self::new(CliErrorCode::SlotUnavailable, e.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        let code = match &e {
            StoreError::Snapshot(_)
            | StoreError::Slot(SlotError::Write { .. })
            | StoreError::Slot(SlotError::QuotaExceeded { .. }) => CliErrorCode::PersistFailed,
            StoreError::Slot(_) => CliErrorCode::SlotUnavailable,
        };
        Self::new(code, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Violation;

    #[test]
    fn test_validation_maps_to_validation_code() {
        let err: CliError = ValidationError::new(vec![Violation::new("name", "too short")]).into();
        assert_eq!(err.code_str(), "STOCKROOM_VALIDATION_FAILED");
        assert!(err.message().contains("name"));
    }

    #[test]
    fn test_slot_read_failure_is_not_a_persist_failure() {
        let read = SlotError::Read {
            key: "inventory_items".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let err: CliError = read.into();
        assert_eq!(err.code_str(), "STOCKROOM_SLOT_UNAVAILABLE");

        let err: CliError = StoreError::Slot(SlotError::Unavailable("offline".into())).into();
        assert_eq!(err.code(), &CliErrorCode::SlotUnavailable);
    }

    #[test]
    fn test_failed_write_is_a_persist_failure() {
        let write = SlotError::Write {
            key: "inventory_items".to_string(),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        let err: CliError = StoreError::Slot(write).into();
        assert_eq!(err.code_str(), "STOCKROOM_PERSIST_FAILED");

        let quota = SlotError::QuotaExceeded { needed: 2, quota: 1 };
        let err: CliError = StoreError::Slot(quota).into();
        assert_eq!(err.code(), &CliErrorCode::PersistFailed);
    }

    #[test]
    fn test_not_found_display() {
        let err = CliError::not_found(RecordId::new(12));
        assert_eq!(err.to_string(), "STOCKROOM_NOT_FOUND: No record with id 12");
    }
}
