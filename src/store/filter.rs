//! Filter criteria for record queries.
//!
//! All predicates are conjunctive. Empty text predicates match everything.

use crate::model::{Record, StockFilter, Thresholds};

/// Query criteria for `RecordStore::filter`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the record name
    pub search_text: String,
    /// Exact category id
    pub category: String,
    pub stock_filter: Option<StockFilter>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn stock(mut self, filter: StockFilter) -> Self {
        self.stock_filter = Some(filter);
        self
    }

    /// Evaluates every predicate against `record`.
    pub fn matches(&self, record: &Record, thresholds: &Thresholds) -> bool {
        self.matches_search(record)
            && self.matches_category(record)
            && self.matches_stock(record, thresholds)
    }

    fn matches_search(&self, record: &Record) -> bool {
        self.search_text.is_empty()
            || record
                .name()
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
    }

    fn matches_category(&self, record: &Record) -> bool {
        self.category.is_empty() || record.category() == self.category
    }

    fn matches_stock(&self, record: &Record, thresholds: &Thresholds) -> bool {
        match self.stock_filter {
            Some(filter) => filter.matches(record.stock_status(thresholds)),
            None => true,
        }
    }
}
