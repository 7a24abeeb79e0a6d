//! Record Store
//!
//! Owns the ordered inventory collection and keeps one persisted slot in
//! step with it.
//!
//! # Guarantees
//!
//! - Record ids are unique and never reused within a store's lifetime
//! - Every successful mutation rewrites the whole snapshot before returning
//! - A persist failure never rolls back memory; it marks the store `Diverged`
//! - Initialization never fails: absent, unreadable and corrupt slots all
//!   start empty
//!
//! Input validation is not done here. Callers run drafts through
//! `model::validate_draft` / `model::validate_patch` first.

mod clock;
mod errors;
mod filter;
mod record_store;
mod snapshot;

pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{SnapshotError, StoreError, StoreResult};
pub use filter::FilterCriteria;
pub use record_store::{RecordStore, SyncState};
pub use snapshot::{decode as decode_snapshot, encode as encode_snapshot};
