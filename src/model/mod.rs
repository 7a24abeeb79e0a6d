//! Data model for the inventory ledger
//!
//! - `Record`: one inventory entry, immutable outside the store
//! - `RecordFields` / `RecordPatch`: typed inputs for add and update
//! - `RecordDraft` / `PatchDraft`: raw inputs checked at the write boundary
//! - Stock classification derived from quantity and configured thresholds
//!
//! Derived values (`total_value`, stock status) are computed on read and
//! never stored.

mod category;
mod errors;
mod record;
mod stock;
mod validate;

pub use category::{default_categories, Category};
pub use errors::{
    ModelErrorCode, ValidationError, ValidationResult, ValidationSeverity, Violation,
};
pub use record::{Record, RecordFields, RecordId, RecordPatch};
pub use stock::{StockFilter, StockLevel, StockStatus, Thresholds};
pub use validate::{validate_draft, validate_patch, PatchDraft, RecordDraft};
