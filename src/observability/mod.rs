//! Observability for stockroom
//!
//! - Structured logging (JSON lines)
//! - Store counters
//! - Typed lifecycle events
//!
//! Observability is read-only: nothing here changes ledger behavior, and a
//! failed log write is dropped silently.
//!
//! # Usage
//!
//! ```ignore
//! use stockroom::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::RecordAdded, &[("id", "7")]);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{min_severity, set_min_severity, Logger, Severity};
pub use metrics::{MetricsSnapshot, StoreMetrics};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
