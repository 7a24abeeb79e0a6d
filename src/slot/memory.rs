//! In-memory slot store with an optional byte quota.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::errors::{SlotError, SlotResult};
use super::{validate_key, SlotStore};

#[derive(Debug, Default)]
struct Inner {
    slots: HashMap<String, String>,
    quota: Option<usize>,
    unavailable: bool,
}

/// Slot store held in process memory.
///
/// Clones share the same slots, so a test can keep one handle while the
/// record store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects saves once the total stored bytes would exceed `quota`.
    pub fn with_quota(quota: usize) -> Self {
        let store = Self::new();
        store.set_quota(Some(quota));
        store
    }

    pub fn set_quota(&self, quota: Option<usize>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.quota = quota;
        }
    }

    /// Makes every operation fail with `SlotError::Unavailable` while set.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.unavailable = unavailable;
        }
    }

    /// Raw content of `key`, bypassing availability checks.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.lock().ok()?.slots.get(key).cloned()
    }

    /// Writes raw content for `key`, bypassing quota and availability.
    pub fn seed(&self, key: &str, value: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.slots.insert(key.to_string(), value.to_string());
        }
    }

    fn guard(&self) -> SlotResult<MutexGuard<'_, Inner>> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| SlotError::Unavailable("memory slot lock poisoned".to_string()))?;
        if inner.unavailable {
            return Err(SlotError::Unavailable("memory slot store offline".to_string()));
        }
        Ok(inner)
    }
}

impl SlotStore for MemorySlotStore {
    fn load(&self, key: &str) -> SlotResult<Option<String>> {
        validate_key(key)?;
        Ok(self.guard()?.slots.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> SlotResult<()> {
        validate_key(key)?;
        let mut inner = self.guard()?;

        if let Some(quota) = inner.quota {
            let others: usize = inner
                .slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others + value.len();
            if needed > quota {
                return Err(SlotError::QuotaExceeded { needed, quota });
            }
        }

        inner.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> SlotResult<()> {
        validate_key(key)?;
        self.guard()?.slots.remove(key);
        Ok(())
    }
}
