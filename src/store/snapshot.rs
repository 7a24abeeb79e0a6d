//! Snapshot codec
//!
//! The persisted layout is a JSON array of plain record field sets:
//!
//! ```text
//! [{"id":1,"name":"...","category":"...","unitPrice":2.5,"quantityOnHand":4,
//!   "createdAt":"...","updatedAt":"..."}, ...]
//! ```
//!
//! No schema version is written. An empty blob or `null` decodes as an
//! empty collection; anything else that is not a well-formed array of
//! records with distinct ids is corrupt.

use std::collections::HashSet;

use super::errors::{SnapshotError, StoreResult};
use crate::model::Record;

/// Serializes the full collection.
///
/// JSON has no encoding for NaN or infinity, so a record carrying one is
/// refused here instead of being written as `null` and poisoning the blob.
pub fn encode(records: &[Record]) -> StoreResult<String> {
    if let Some(bad) = records.iter().find(|r| !r.unit_price().is_finite()) {
        return Err(SnapshotError::NonFinitePrice(bad.id()).into());
    }
    serde_json::to_string(records).map_err(|e| SnapshotError::Encode(e).into())
}

/// Parses a persisted blob back into records, in stored order.
pub fn decode(blob: &str) -> Result<Vec<Record>, SnapshotError> {
    if blob.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<Record> = serde_json::from_str::<Option<Vec<Record>>>(blob)
        .map_err(SnapshotError::Malformed)?
        .unwrap_or_default();

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.id()) {
            return Err(SnapshotError::DuplicateId(record.id()));
        }
    }

    Ok(records)
}
