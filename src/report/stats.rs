//! Aggregate statistics over a record snapshot

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Record, StockStatus, Thresholds};

/// Whole-snapshot counters and totals.
///
/// An empty snapshot yields every counter at zero and an empty category map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub count: usize,
    /// Σ unit_price × quantity_on_hand
    pub total_value: f64,
    /// Σ quantity_on_hand
    pub total_units: u64,
    /// Records with 0 < quantity ≤ low threshold
    pub low_stock_count: usize,
    /// Records with quantity = 0
    pub out_of_stock_count: usize,
    pub counts_by_category: BTreeMap<String, usize>,
    /// total_value / total_units, 0 when there are no units
    pub mean_unit_price: f64,
    /// total_units / count, 0 when there are no records
    pub mean_units_per_record: f64,
}

/// Computes `InventoryStats` in one pass over `records`.
pub fn aggregate_stats(records: &[Record], thresholds: &Thresholds) -> InventoryStats {
    let mut stats = InventoryStats::default();

    for record in records {
        stats.count += 1;
        stats.total_value += record.total_value();
        stats.total_units += u64::from(record.quantity_on_hand());

        match record.stock_status(thresholds) {
            StockStatus::OutOfStock => stats.out_of_stock_count += 1,
            StockStatus::LowStock => stats.low_stock_count += 1,
            StockStatus::Available => {}
        }

        *stats
            .counts_by_category
            .entry(record.category().to_string())
            .or_insert(0) += 1;
    }

    if stats.total_units > 0 {
        stats.mean_unit_price = stats.total_value / stats.total_units as f64;
    }
    if stats.count > 0 {
        stats.mean_units_per_record = stats.total_units as f64 / stats.count as f64;
    }

    stats
}
