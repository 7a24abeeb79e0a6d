//! Observable events in the ledger lifecycle.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration file loaded and validated
    ConfigLoaded,

    // Rehydration
    /// Store initialization begins
    StoreInitBegin,
    /// Store initialization complete
    StoreInitComplete,
    /// No persisted snapshot was found
    SnapshotMissing,
    /// Persisted snapshot could not be decoded; starting empty
    SnapshotCorrupt,
    /// Persisted snapshot could not be read; starting empty
    SnapshotUnreadable,

    // Mutations
    /// Record appended
    RecordAdded,
    /// Record fields replaced
    RecordUpdated,
    /// Record removed
    RecordRemoved,
    /// Add refused because every record id is taken
    IdsExhausted,
    /// All records dropped and the slot removed
    SlotCleared,

    // Persistence
    /// Full collection written to the slot
    PersistComplete,
    /// Slot write failed; memory is ahead of the slot
    PersistFailed,

    // Reporting
    /// A report was computed over a snapshot
    ReportGenerated,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::StoreInitBegin => "STORE_INIT_BEGIN",
            Event::StoreInitComplete => "STORE_INIT_COMPLETE",
            Event::SnapshotMissing => "SNAPSHOT_MISSING",
            Event::SnapshotCorrupt => "SNAPSHOT_CORRUPT",
            Event::SnapshotUnreadable => "SNAPSHOT_UNREADABLE",

            Event::RecordAdded => "RECORD_ADDED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordRemoved => "RECORD_REMOVED",
            Event::IdsExhausted => "IDS_EXHAUSTED",
            Event::SlotCleared => "SLOT_CLEARED",

            Event::PersistComplete => "PERSIST_COMPLETE",
            Event::PersistFailed => "PERSIST_FAILED",

            Event::ReportGenerated => "REPORT_GENERATED",
        }
    }

    /// Severity this event is logged at.
    pub fn severity(&self) -> Severity {
        match self {
            Event::PersistFailed | Event::SnapshotUnreadable | Event::IdsExhausted => {
                Severity::Error
            }
            Event::SnapshotCorrupt | Event::SlotCleared => Severity::Warn,
            Event::PersistComplete | Event::ReportGenerated => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
