//! Report engine seam
//!
//! Callers hold a `ReportEngine` resolved once at startup and hand it a
//! snapshot (`RecordStore::list_all`). Engines never see the live store.

use std::collections::BTreeMap;

use serde::Serialize;

use super::grouping::{self, CategoryShare};
use super::ranking;
use super::stats::{self, InventoryStats};
use crate::model::{Record, Thresholds};

/// Every report for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub stats: InventoryStats,
    pub low_stock: Vec<Record>,
    pub by_category: BTreeMap<String, Vec<Record>>,
    pub top_by_value: Vec<Record>,
    pub breakdown: Vec<CategoryShare>,
}

/// Pure report operations over a record snapshot.
pub trait ReportEngine {
    fn aggregate_stats(&self, records: &[Record]) -> InventoryStats;

    fn low_stock_records(&self, records: &[Record]) -> Vec<Record>;

    fn group_by_category(&self, records: &[Record]) -> BTreeMap<String, Vec<Record>>;

    fn top_by_value(&self, records: &[Record], limit: usize) -> Vec<Record>;

    fn category_breakdown(&self, records: &[Record]) -> Vec<CategoryShare>;

    /// Runs every report against the same snapshot.
    fn full_report(&self, records: &[Record], limit: usize) -> InventoryReport {
        InventoryReport {
            stats: self.aggregate_stats(records),
            low_stock: self.low_stock_records(records),
            by_category: self.group_by_category(records),
            top_by_value: self.top_by_value(records, limit),
            breakdown: self.category_breakdown(records),
        }
    }
}

/// The stock reports, classified against fixed thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReports {
    thresholds: Thresholds,
}

impl StandardReports {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }
}

impl ReportEngine for StandardReports {
    fn aggregate_stats(&self, records: &[Record]) -> InventoryStats {
        stats::aggregate_stats(records, &self.thresholds)
    }

    fn low_stock_records(&self, records: &[Record]) -> Vec<Record> {
        grouping::low_stock_records(records, &self.thresholds)
    }

    fn group_by_category(&self, records: &[Record]) -> BTreeMap<String, Vec<Record>> {
        grouping::group_by_category(records)
    }

    fn top_by_value(&self, records: &[Record], limit: usize) -> Vec<Record> {
        ranking::top_by_value(records, limit)
    }

    fn category_breakdown(&self, records: &[Record]) -> Vec<CategoryShare> {
        grouping::category_breakdown(records)
    }
}
