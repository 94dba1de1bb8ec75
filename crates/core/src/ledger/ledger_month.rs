//! Calendar month addressed by the ledger.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::constants::{MAX_LEDGER_YEAR, MIN_LEDGER_YEAR};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::{get_days_between, today_utc};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A validated (year, month) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerMonth {
    year: i32,
    month: u32,
}

impl LedgerMonth {
    /// Builds a ledger month, rejecting months outside 1..=12 and years
    /// outside the supported range.
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Validation(ValidationError::InvalidMonth(month)));
        }
        if !(MIN_LEDGER_YEAR..=MAX_LEDGER_YEAR).contains(&year) {
            return Err(Error::Validation(ValidationError::InvalidYear(year)));
        }
        Ok(Self { year, month })
    }

    /// The month containing today's UTC date.
    pub fn current() -> Self {
        let today = today_utc();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // In range by construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or_default()
    }

    /// Number of calendar days, leap years included.
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Every date of the month in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        get_days_between(self.first_day(), self.last_day())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// "April 2024"
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl std::fmt::Display for LedgerMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
