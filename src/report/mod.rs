//! Report Engine
//!
//! Stateless computations over a record snapshot: aggregate counters,
//! low-stock selection, grouping, ranking by value and category breakdown.
//!
//! Every function is total over its input and never touches the store.

mod engine;
mod grouping;
mod ranking;
mod stats;

pub use engine::{InventoryReport, ReportEngine, StandardReports};
pub use grouping::{category_breakdown, group_by_category, low_stock_records, CategoryShare};
pub use ranking::{top_by_value, DEFAULT_TOP_LIMIT};
pub use stats::{aggregate_stats, InventoryStats};
