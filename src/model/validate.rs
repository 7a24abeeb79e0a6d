//! Write-boundary validation.
//!
//! Drafts carry the raw values handed over by the presentation side
//! (signed quantity, unchecked price). Validation collects every problem
//! rather than stopping at the first, trims text fields, and produces the
//! typed field sets the store accepts.

use super::errors::{ValidationError, ValidationResult, Violation};
use super::record::{RecordFields, RecordPatch};

const MIN_NAME_CHARS: usize = 2;

/// Raw input for a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity_on_hand: i64,
}

/// Raw input for a partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchDraft {
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity_on_hand: Option<i64>,
}

/// Validates a complete draft.
pub fn validate_draft(draft: &RecordDraft) -> ValidationResult<RecordFields> {
    let mut violations = Vec::new();

    let name = check_name(&draft.name, &mut violations);
    let category = check_category(&draft.category, &mut violations);
    check_price(draft.unit_price, &mut violations);
    let quantity = check_quantity(draft.quantity_on_hand, &mut violations);

    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }

    Ok(RecordFields {
        name,
        category,
        unit_price: draft.unit_price,
        quantity_on_hand: quantity,
    })
}

/// Validates only the fields present in a patch draft.
pub fn validate_patch(draft: &PatchDraft) -> ValidationResult<RecordPatch> {
    let mut violations = Vec::new();
    let mut patch = RecordPatch::new();

    if let Some(name) = &draft.name {
        patch.name = Some(check_name(name, &mut violations));
    }
    if let Some(category) = &draft.category {
        patch.category = Some(check_category(category, &mut violations));
    }
    if let Some(price) = draft.unit_price {
        check_price(price, &mut violations);
        patch.unit_price = Some(price);
    }
    if let Some(quantity) = draft.quantity_on_hand {
        patch.quantity_on_hand = Some(check_quantity(quantity, &mut violations));
    }

    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }
    Ok(patch)
}

fn check_name(raw: &str, violations: &mut Vec<Violation>) -> String {
    let name = raw.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        violations.push(Violation::new(
            "name",
            format!("must be at least {} characters", MIN_NAME_CHARS),
        ));
    }
    name.to_string()
}

fn check_category(raw: &str, violations: &mut Vec<Violation>) -> String {
    let category = raw.trim();
    if category.is_empty() {
        violations.push(Violation::new("category", "is required"));
    }
    category.to_string()
}

fn check_price(price: f64, violations: &mut Vec<Violation>) {
    if !price.is_finite() || price < 0.0 {
        violations.push(Violation::new("unit_price", "must be a finite number >= 0"));
    }
}

fn check_quantity(quantity: i64, violations: &mut Vec<Violation>) -> u32 {
    match u32::try_from(quantity) {
        Ok(q) => q,
        Err(_) => {
            violations.push(Violation::new(
                "quantity_on_hand",
                format!("must be an integer between 0 and {}", u32::MAX),
            ));
            0
        }
    }
}
