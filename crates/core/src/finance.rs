//! Finance summary arithmetic.
//!
//! Finance records carry a free-text kind. Only `income` and `expense`
//! (case-insensitive) feed the totals; other kinds are counted but ignored.

use serde::Serialize;

use crate::types::Timestamp;

pub const KIND_INCOME: &str = "income";
pub const KIND_EXPENSE: &str = "expense";

/// Aggregated view over every finance record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinanceSummary {
    pub revenue: f64,
    pub expenses: f64,
    /// `revenue - expenses`.
    pub profit: f64,
    pub record_count: usize,
    pub generated_at: Timestamp,
}

/// Fold `(kind, amount)` pairs into a [`FinanceSummary`].
pub fn summarize<'a, I>(entries: I, generated_at: Timestamp) -> FinanceSummary
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut revenue = 0.0;
    let mut expenses = 0.0;
    let mut record_count = 0;

    for (kind, amount) in entries {
        record_count += 1;
        if kind.eq_ignore_ascii_case(KIND_INCOME) {
            revenue += amount;
        } else if kind.eq_ignore_ascii_case(KIND_EXPENSE) {
            expenses += amount;
        }
    }

    FinanceSummary {
        revenue,
        expenses,
        profit: revenue - expenses,
        record_count,
        generated_at,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn empty_input_is_all_zero() {
        let summary = summarize(std::iter::empty(), Utc::now());
        assert_eq!(summary.revenue, 0.0);
        assert_eq!(summary.expenses, 0.0);
        assert_eq!(summary.profit, 0.0);
        assert_eq!(summary.record_count, 0);
    }

    #[test]
    fn income_and_expense_are_summed_separately() {
        let entries = [("income", 1000.0), ("expense", 250.0), ("INCOME", 500.0)];
        let summary = summarize(entries, Utc::now());
        assert_eq!(summary.revenue, 1500.0);
        assert_eq!(summary.expenses, 250.0);
        assert_eq!(summary.profit, 1250.0);
        assert_eq!(summary.record_count, 3);
    }

    #[test]
    fn unknown_kinds_count_but_do_not_contribute() {
        let entries = [("subvention", 300.0), ("expense", 100.0)];
        let summary = summarize(entries, Utc::now());
        assert_eq!(summary.revenue, 0.0);
        assert_eq!(summary.expenses, 100.0);
        assert_eq!(summary.profit, -100.0);
        assert_eq!(summary.record_count, 2);
    }
}
