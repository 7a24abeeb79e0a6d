//! Selection, grouping and per-category share of value

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::model::{Record, StockStatus, Thresholds};

/// One category's slice of the grand total value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    pub total_value: f64,
    /// 100 × total_value / grand total, rounded to two decimals; 0 when the
    /// grand total is 0
    pub percentage_of_grand_total: f64,
}

/// Records with 0 < quantity ≤ low threshold, in input order.
pub fn low_stock_records(records: &[Record], thresholds: &Thresholds) -> Vec<Record> {
    records
        .iter()
        .filter(|r| r.stock_status(thresholds) == StockStatus::LowStock)
        .cloned()
        .collect()
}

/// Records keyed by category id. Input order is kept within each group.
pub fn group_by_category(records: &[Record]) -> BTreeMap<String, Vec<Record>> {
    let mut groups: BTreeMap<String, Vec<Record>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.category().to_string())
            .or_default()
            .push(record.clone());
    }
    groups
}

/// Count and value per category, in order of first appearance.
pub fn category_breakdown(records: &[Record]) -> Vec<CategoryShare> {
    let grand_total: f64 = records.iter().map(Record::total_value).sum();

    let mut shares: Vec<CategoryShare> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.category()).or_insert_with(|| {
            shares.push(CategoryShare {
                category: record.category().to_string(),
                count: 0,
                total_value: 0.0,
                percentage_of_grand_total: 0.0,
            });
            shares.len() - 1
        });

        let share = &mut shares[slot];
        share.count += 1;
        share.total_value += record.total_value();
    }

    if grand_total > 0.0 {
        for share in &mut shares {
            share.percentage_of_grand_total = round_cents(100.0 * share.total_value / grand_total);
        }
    }

    shares
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
