//! Calendar-month aggregation series.
//!
//! Dashboard endpoints (listings per month, views per month) always return
//! one entry per month of the requested year, in order, with zero totals
//! for months the store has no data for.

/// One bucket of a year series, keyed `"YYYY-MM"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: String,
    pub total: i64,
}

/// Expand sparse per-month totals into exactly 12 ordered buckets for `year`.
///
/// `rows` is the aggregation result keyed `"YYYY-MM"`; keys outside `year`
/// are ignored rather than rejected.
pub fn zero_filled_year(year: i32, rows: &[(String, i64)]) -> Vec<MonthTotal> {
    (1..=12)
        .map(|m| {
            let month = format!("{year}-{m:02}");
            let total = rows
                .iter()
                .find(|(key, _)| *key == month)
                .map(|(_, total)| *total)
                .unwrap_or(0);
            MonthTotal { month, total }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_exactly_twelve_buckets() {
        let series = zero_filled_year(2026, &[]);
        assert_eq!(series.len(), 12);
        assert!(series.iter().all(|b| b.total == 0));
    }

    #[test]
    fn should_order_buckets_january_to_december() {
        let series = zero_filled_year(2026, &[]);
        assert_eq!(series[0].month, "2026-01");
        assert_eq!(series[11].month, "2026-12");
    }

    #[test]
    fn should_fill_known_months_and_zero_the_rest() {
        let rows = vec![("2026-03".to_owned(), 7), ("2026-11".to_owned(), 2)];
        let series = zero_filled_year(2026, &rows);
        assert_eq!(series[2].total, 7);
        assert_eq!(series[10].total, 2);
        let sum: i64 = series.iter().map(|b| b.total).sum();
        assert_eq!(sum, 9);
    }

    #[test]
    fn should_ignore_rows_from_other_years() {
        let rows = vec![("2025-06".to_owned(), 99), ("2026-06".to_owned(), 1)];
        let series = zero_filled_year(2026, &rows);
        assert_eq!(series[5].total, 1);
    }
}
