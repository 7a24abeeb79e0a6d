//! Ranking by total value

use crate::model::Record;

/// Default number of records returned by `top_by_value`.
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// The `limit` highest-value records, highest first.
///
/// The sort is stable: records of equal value keep their input order.
pub fn top_by_value(records: &[Record], limit: usize) -> Vec<Record> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.total_value().total_cmp(&a.total_value()));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecordFields, RecordId};
    use chrono::Utc;

    fn valued(id: u64, value: f64) -> Record {
        let t = Utc::now();
        Record::restore(RecordId::new(id), RecordFields::new("Item", "x", value, 1), t, t)
    }

    fn ids(records: &[Record]) -> Vec<u64> {
        records.iter().map(|r| r.id().get()).collect()
    }

    #[test]
    fn test_descending_and_truncated() {
        let records = [valued(1, 30.0), valued(2, 10.0), valued(3, 20.0)];
        assert_eq!(ids(&top_by_value(&records, 2)), vec![1, 3]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = [valued(1, 5.0), valued(2, 9.0), valued(3, 5.0), valued(4, 5.0)];
        assert_eq!(ids(&top_by_value(&records, 10)), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_default_limit() {
        let records: Vec<_> = (1..=8).map(|i| valued(i, i as f64)).collect();
        assert_eq!(ids(&top_by_value(&records, DEFAULT_TOP_LIMIT)), vec![8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_zero_limit_and_empty_input() {
        assert!(top_by_value(&[valued(1, 1.0)], 0).is_empty());
        assert!(top_by_value(&[], 5).is_empty());
    }
}
