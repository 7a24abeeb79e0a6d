//! The record store: sole owner of the in-memory collection and the only
//! writer of its persisted slot.

use std::fmt;

use super::clock::{Clock, SystemClock};
use super::errors::StoreResult;
use super::filter::FilterCriteria;
use super::snapshot;
use crate::model::{Record, RecordFields, RecordId, RecordPatch, Thresholds};
use crate::observability::{log_event_with_fields, Event, StoreMetrics};
use crate::slot::{validate_key, SlotResult, SlotStore};

/// Whether the persisted slot reflects the in-memory collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// The last persist (or load) succeeded.
    InSync,
    /// Memory is ahead of the slot until the next successful persist.
    Diverged,
}

/// Ordered, in-memory inventory ledger backed by one persisted slot.
///
/// Every successful `add`, `update` and `remove` re-serializes the entire
/// collection before returning. A failed write is logged and counted; the
/// in-memory change stands and `sync_state()` reports `Diverged`.
pub struct RecordStore<S: SlotStore> {
    slot: S,
    key: String,
    records: Vec<Record>,
    /// `None` once the id space is used up; `add` refuses from then on.
    next_id: Option<RecordId>,
    thresholds: Thresholds,
    clock: Box<dyn Clock>,
    sync: SyncState,
    metrics: StoreMetrics,
}

impl<S: SlotStore> RecordStore<S> {
    /// Creates an empty store writing to `key` in `slot`.
    ///
    /// Nothing is read until `initialize` is called.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::InvalidKey` if `key` is not a usable slot key.
    pub fn new(slot: S, key: impl Into<String>, thresholds: Thresholds) -> SlotResult<Self> {
        let key = key.into();
        validate_key(&key)?;

        Ok(Self {
            slot,
            key,
            records: Vec::new(),
            next_id: Some(RecordId::new(1)),
            thresholds,
            clock: Box::new(SystemClock),
            sync: SyncState::InSync,
            metrics: StoreMetrics::new(),
        })
    }

    /// Replaces the timestamp source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Loads the persisted snapshot and returns a copy of the collection.
    ///
    /// An absent slot yields an empty collection. An unreadable or corrupt
    /// slot also yields an empty collection; the failure is logged, never
    /// returned.
    pub fn initialize(&mut self) -> Vec<Record> {
        log_event_with_fields(Event::StoreInitBegin, &[("slot", self.key.as_str())]);

        let (records, sync) = match self.slot.load(&self.key) {
            Ok(None) => {
                log_event_with_fields(Event::SnapshotMissing, &[("slot", self.key.as_str())]);
                (Vec::new(), SyncState::InSync)
            }
            Ok(Some(blob)) => match snapshot::decode(&blob) {
                Ok(records) => (records, SyncState::InSync),
                Err(e) => {
                    self.metrics.increment_corrupt_loads();
                    log_event_with_fields(
                        Event::SnapshotCorrupt,
                        &[("slot", self.key.as_str()), ("error", e.to_string().as_str())],
                    );
                    (Vec::new(), SyncState::Diverged)
                }
            },
            Err(e) => {
                log_event_with_fields(
                    Event::SnapshotUnreadable,
                    &[
                        ("slot", self.key.as_str()),
                        ("code", e.code()),
                        ("error", e.to_string().as_str()),
                    ],
                );
                (Vec::new(), SyncState::Diverged)
            }
        };

        // Ids already handed out in this process are never reused
        if let Some(max) = records.iter().map(Record::id).max() {
            self.next_id = match (self.next_id, max.checked_next()) {
                (Some(current), Some(after_max)) => Some(current.max(after_max)),
                _ => None,
            };
        }
        self.records = records;
        self.sync = sync;

        log_event_with_fields(
            Event::StoreInitComplete,
            &[("records", self.records.len().to_string().as_str())],
        );
        self.list_all()
    }

    /// Copy of the whole collection, in insertion order.
    pub fn list_all(&self) -> Vec<Record> {
        self.records.clone()
    }

    pub fn get_by_id(&self, id: RecordId) -> Option<Record> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    /// Appends a record built from `fields` and persists.
    ///
    /// Input is not validated here; see `model::validate_draft`. Returns
    /// `None`, leaving the collection and slot untouched, when every id has
    /// already been handed out.
    pub fn add(&mut self, fields: RecordFields) -> Option<Record> {
        let Some(id) = self.next_id else {
            log_event_with_fields(Event::IdsExhausted, &[("slot", self.key.as_str())]);
            return None;
        };
        self.next_id = id.checked_next();

        let record = Record::create(id, fields, self.clock.now());
        self.records.push(record.clone());
        self.metrics.increment_added();
        log_event_with_fields(Event::RecordAdded, &[("id", id.to_string().as_str())]);

        self.persist();
        Some(record)
    }

    /// Applies `patch` to the record with `id` and persists.
    ///
    /// Returns `None`, without touching the slot, when `id` is unknown.
    pub fn update(&mut self, id: RecordId, patch: RecordPatch) -> Option<Record> {
        let now = self.clock.now();
        let updated = {
            let record = self.records.iter_mut().find(|r| r.id() == id)?;
            record.apply(patch, now);
            record.clone()
        };

        self.metrics.increment_updated();
        log_event_with_fields(Event::RecordUpdated, &[("id", id.to_string().as_str())]);

        self.persist();
        Some(updated)
    }

    /// Removes the record with `id`. Persists only if something was removed.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            return false;
        };
        self.records.remove(index);

        self.metrics.increment_removed();
        log_event_with_fields(Event::RecordRemoved, &[("id", id.to_string().as_str())]);

        self.persist();
        true
    }

    /// Records matching every predicate of `criteria`, in insertion order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| criteria.matches(r, &self.thresholds))
            .cloned()
            .collect()
    }

    /// Records whose category equals `category`.
    pub fn by_category(&self, category: &str) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.category() == category)
            .cloned()
            .collect()
    }

    /// Drops every record and removes the persisted slot.
    ///
    /// Returns how many records were dropped. Ids are not recycled.
    pub fn clear(&mut self) -> usize {
        let dropped = self.records.len();
        self.records.clear();

        match self.slot.remove(&self.key) {
            Ok(()) => self.sync = SyncState::InSync,
            Err(e) => {
                self.sync = SyncState::Diverged;
                self.metrics.increment_persists_failed();
                log_event_with_fields(
                    Event::PersistFailed,
                    &[
                        ("slot", self.key.as_str()),
                        ("code", e.code()),
                        ("error", e.to_string().as_str()),
                    ],
                );
            }
        }

        log_event_with_fields(
            Event::SlotCleared,
            &[("slot", self.key.as_str()), ("dropped", dropped.to_string().as_str())],
        );
        dropped
    }

    /// Writes the collection now and reports the outcome.
    ///
    /// This is the caller-driven way to close a divergence left by a failed
    /// write; the store never retries on its own.
    pub fn flush(&mut self) -> StoreResult<()> {
        let blob = snapshot::encode(&self.records)?;
        self.slot.save(&self.key, &blob)?;

        self.sync = SyncState::InSync;
        self.metrics.increment_persists_ok();
        log_event_with_fields(
            Event::PersistComplete,
            &[("slot", self.key.as_str()), ("bytes", blob.len().to_string().as_str())],
        );
        Ok(())
    }

    fn persist(&mut self) {
        if let Err(e) = self.flush() {
            self.sync = SyncState::Diverged;
            self.metrics.increment_persists_failed();
            log_event_with_fields(
                Event::PersistFailed,
                &[
                    ("slot", self.key.as_str()),
                    ("code", e.code()),
                    ("error", e.to_string().as_str()),
                ],
            );
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn sync_state(&self) -> SyncState {
        self.sync
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn slot_key(&self) -> &str {
        &self.key
    }

    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }
}

impl<S: SlotStore> fmt::Debug for RecordStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("slot_key", &self.key)
            .field("records", &self.records.len())
            .field("next_id", &self.next_id)
            .field("sync", &self.sync)
            .finish()
    }
}
