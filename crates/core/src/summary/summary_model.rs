//! Monthly summary domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::{DailyRecord, LedgerMonth};

/// Cached aggregation of one account's month.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub account_id: String,
    pub year: i32,
    pub month: u32,
    pub total_days: i32,
    pub taken_days: i32,
    pub total_amount: Decimal,
    pub calculated_at: NaiveDateTime,
}

impl MonthlySummary {
    pub fn new(
        account_id: &str,
        month: LedgerMonth,
        totals: MonthlyTotals,
        calculated_at: NaiveDateTime,
    ) -> Self {
        Self {
            account_id: account_id.to_string(),
            year: month.year(),
            month: month.month(),
            total_days: totals.total_days,
            taken_days: totals.taken_days,
            total_amount: totals.total_amount,
            calculated_at,
        }
    }

    pub fn totals(&self) -> MonthlyTotals {
        MonthlyTotals {
            total_days: self.total_days,
            taken_days: self.taken_days,
            total_amount: self.total_amount,
        }
    }
}

/// Day counts and billed amount of a set of records.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    pub total_days: i32,
    pub taken_days: i32,
    pub total_amount: Decimal,
}

impl MonthlyTotals {
    /// Untaken days count towards `total_days` only.
    pub fn from_records(records: &[DailyRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            acc.total_days += 1;
            if record.is_taken {
                acc.taken_days += 1;
                acc.total_amount += record.total_cost();
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(day: u32, is_taken: bool, base: Decimal, additional: Decimal) -> DailyRecord {
        let date = NaiveDate::from_ymd_opt(2024, 4, day).unwrap();
        DailyRecord::new(
            format!("rec-{day}"),
            "acc-1".to_string(),
            date,
            is_taken,
            base,
            additional,
            None,
            date.and_hms_opt(0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_empty_records_give_zero_totals() {
        assert_eq!(MonthlyTotals::from_records(&[]), MonthlyTotals::default());
    }

    #[test]
    fn test_untaken_days_contribute_nothing() {
        let records = vec![
            record(1, true, dec!(104), dec!(0)),
            record(2, false, dec!(104), dec!(50)),
            record(3, true, dec!(104), dec!(20)),
        ];
        let totals = MonthlyTotals::from_records(&records);
        assert_eq!(totals.total_days, 3);
        assert_eq!(totals.taken_days, 2);
        assert_eq!(totals.total_amount, dec!(228));
    }

    #[test]
    fn test_full_april_at_default_cost() {
        let records: Vec<_> = (1..=30)
            .map(|d| record(d, true, dec!(104.00), dec!(0)))
            .collect();
        let totals = MonthlyTotals::from_records(&records);
        assert_eq!(totals.total_days, 30);
        assert_eq!(totals.taken_days, 30);
        assert_eq!(totals.total_amount, dec!(3120.00));
    }

    #[test]
    fn test_decimal_sum_is_exact() {
        let records: Vec<_> = (1..=10)
            .map(|d| record(d, true, dec!(0.1), dec!(0.2)))
            .collect();
        assert_eq!(
            MonthlyTotals::from_records(&records).total_amount,
            dec!(3.0)
        );
    }
}
