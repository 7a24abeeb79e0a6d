//! Stock classification derived from quantity on hand.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Quantity thresholds. `critical` only affects display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub low: u32,
    pub critical: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { low: 20, critical: 10 }
    }
}

/// Stock status used for filtering and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// quantity > low
    Available,
    /// 0 < quantity <= low
    LowStock,
    /// quantity == 0
    OutOfStock,
}

impl StockStatus {
    pub fn classify(quantity: u32, thresholds: &Thresholds) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= thresholds.low {
            StockStatus::LowStock
        } else {
            StockStatus::Available
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Available => "available",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display tier. Splits `LowStock` at the critical threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Ok,
    Low,
    Critical,
    Out,
}

impl StockLevel {
    pub fn classify(quantity: u32, thresholds: &Thresholds) -> Self {
        if quantity == 0 {
            StockLevel::Out
        } else if quantity <= thresholds.critical {
            StockLevel::Critical
        } else if quantity <= thresholds.low {
            StockLevel::Low
        } else {
            StockLevel::Ok
        }
    }

    /// Human-readable label for `quantity` at this tier.
    pub fn label(&self, quantity: u32) -> String {
        match self {
            StockLevel::Out => "out of stock".to_string(),
            StockLevel::Critical => format!("critical ({})", quantity),
            StockLevel::Low => format!("low ({})", quantity),
            StockLevel::Ok => format!("{} units", quantity),
        }
    }
}

/// Stock predicate of a filter query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockFilter {
    Low,
    Out,
    Available,
}

impl StockFilter {
    /// Parses `low`, `out` or `available`. Anything else means no stock filter.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(StockFilter::Low),
            "out" => Some(StockFilter::Out),
            "available" => Some(StockFilter::Available),
            _ => None,
        }
    }

    pub fn matches(&self, status: StockStatus) -> bool {
        matches!(
            (self, status),
            (StockFilter::Low, StockStatus::LowStock)
                | (StockFilter::Out, StockStatus::OutOfStock)
                | (StockFilter::Available, StockStatus::Available)
        )
    }
}
