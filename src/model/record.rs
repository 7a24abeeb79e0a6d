//! The inventory record and its field sets.
//!
//! A `Record` is an immutable value from the outside: every field is read
//! through a getter, and the only mutation path is `RecordStore::update`.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stock::{StockLevel, StockStatus, Thresholds};

/// Identifier of a record, unique within one store for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one, or `None` once the id space
    /// is used up.
    pub fn checked_next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(RecordId)
    }
}

/// Caller-supplied fields for a new record.
///
/// The store accepts these as-is; use `validate_draft` at the write
/// boundary to obtain a checked value.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity_on_hand: u32,
}

impl RecordFields {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: f64,
        quantity_on_hand: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            unit_price,
            quantity_on_hand,
        }
    }
}

/// Partial replacement of record fields. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity_on_hand: Option<u32>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    pub fn with_quantity(mut self, quantity_on_hand: u32) -> Self {
        self.quantity_on_hand = Some(quantity_on_hand);
        self
    }
}

/// One inventory entry.
///
/// Serializes to the persisted field set
/// `{id, name, category, unitPrice, quantityOnHand, createdAt, updatedAt}`.
/// Older snapshots used `price` and `quantity`;
/// both are accepted on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    id: RecordId,
    name: String,
    category: String,
    #[serde(alias = "price")]
    unit_price: f64,
    #[serde(alias = "quantity")]
    quantity_on_hand: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Record {
    /// Builds a fresh record; both timestamps are `now`.
    pub(crate) fn create(id: RecordId, fields: RecordFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            unit_price: fields.unit_price,
            quantity_on_hand: fields.quantity_on_hand,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstructs a record from a previously persisted field set.
    pub fn restore(
        id: RecordId,
        fields: RecordFields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            unit_price: fields.unit_price,
            quantity_on_hand: fields.quantity_on_hand,
            created_at,
            updated_at,
        }
    }

    /// Applies the present fields of `patch` and stamps `updated_at`.
    ///
    /// `updated_at` never moves before `created_at`, even if the clock does.
    pub(crate) fn apply(&mut self, patch: RecordPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(unit_price) = patch.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(quantity) = patch.quantity_on_hand {
            self.quantity_on_hand = quantity;
        }
        self.updated_at = now.max(self.created_at);
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity_on_hand(&self) -> u32 {
        self.quantity_on_hand
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// `unit_price × quantity_on_hand`
    pub fn total_value(&self) -> f64 {
        self.unit_price * f64::from(self.quantity_on_hand)
    }

    pub fn stock_status(&self, thresholds: &Thresholds) -> StockStatus {
        StockStatus::classify(self.quantity_on_hand, thresholds)
    }

    pub fn stock_level(&self, thresholds: &Thresholds) -> StockLevel {
        StockLevel::classify(self.quantity_on_hand, thresholds)
    }

    /// Copies the editable fields back out.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            category: self.category.clone(),
            unit_price: self.unit_price,
            quantity_on_hand: self.quantity_on_hand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap()
    }

    fn gauze(id: u64, category: &str, quantity: u32) -> Record {
        let fields = RecordFields::new("Gauze", category, 2.5, quantity);
        Record::create(RecordId::new(id), fields, t0())
    }

    #[test]
    fn test_create_sets_both_timestamps() {
        let record = gauze(1, "clinical_supplies", 40);
        assert_eq!(record.created_at(), t0());
        assert_eq!(record.updated_at(), t0());
    }

    #[test]
    fn test_total_value() {
        let record = gauze(1, "x", 4);
        assert_eq!(record.total_value(), 10.0);
    }

    #[test]
    fn test_apply_touches_only_present_fields() {
        let mut record = gauze(3, "x", 4);
        let later = t0() + Duration::minutes(5);
        record.apply(RecordPatch::new().with_quantity(9), later);

        assert_eq!(record.quantity_on_hand(), 9);
        assert_eq!(record.name(), "Gauze");
        assert_eq!(record.category(), "x");
        assert_eq!(record.unit_price(), 2.5);
        assert_eq!(record.created_at(), t0());
        assert_eq!(record.updated_at(), later);
    }

    #[test]
    fn test_apply_never_moves_updated_before_created() {
        let mut record = gauze(3, "x", 4);
        record.apply(RecordPatch::new().with_name("Tape"), t0() - Duration::hours(1));
        assert_eq!(record.updated_at(), t0());
    }

    #[test]
    fn test_serialized_field_names() {
        let record = gauze(7, "x", 4);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["unitPrice"], 2.5);
        assert_eq!(value["quantityOnHand"], 4);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
    }

    #[test]
    fn test_decode_accepts_legacy_field_names() {
        let json = r#"{"id":2,"name":"Tape","category":"other","price":1.25,"quantity":8,
            "createdAt":"2026-01-05T09:30:00.000Z","updatedAt":"2026-01-05T09:30:00.000Z"}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.id(), RecordId::new(2));
        assert_eq!(record.unit_price(), 1.25);
        assert_eq!(record.quantity_on_hand(), 8);
        assert_eq!(record.created_at(), t0());
    }

    #[test]
    fn test_record_id_parse() {
        assert_eq!("42".parse::<RecordId>().unwrap(), RecordId::new(42));
        assert!("-1".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_checked_next() {
        assert_eq!(RecordId::new(41).checked_next(), Some(RecordId::new(42)));
        assert_eq!(RecordId::new(u64::MAX).checked_next(), None);
    }
}
