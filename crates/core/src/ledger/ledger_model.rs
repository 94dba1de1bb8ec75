//! Daily record domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use super::ledger_month::LedgerMonth;
use crate::accounts::validate_non_negative;
use crate::errors::Result;

/// Billable amount of one day: `base + additional` when taken, zero otherwise.
pub fn derive_total_cost(is_taken: bool, base_cost: Decimal, additional_cost: Decimal) -> Decimal {
    if is_taken {
        base_cost + additional_cost
    } else {
        Decimal::ZERO
    }
}

/// One day of the ledger.
///
/// `total_cost` has no backing field; it is derived from the other three
/// cost fields on every read, serialization included.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub id: String,
    pub account_id: String,
    pub record_date: NaiveDate,
    pub is_taken: bool,
    pub base_cost: Decimal,
    pub additional_cost: Decimal,
    pub notes: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl DailyRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        account_id: String,
        record_date: NaiveDate,
        is_taken: bool,
        base_cost: Decimal,
        additional_cost: Decimal,
        notes: Option<String>,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            account_id,
            record_date,
            is_taken,
            base_cost,
            additional_cost,
            notes,
            updated_at,
        }
    }

    pub fn total_cost(&self) -> Decimal {
        derive_total_cost(self.is_taken, self.base_cost, self.additional_cost)
    }

    /// Applies an update in memory.
    pub fn apply(&mut self, update: &DailyRecordUpdate, updated_at: NaiveDateTime) {
        self.is_taken = update.is_taken;
        self.base_cost = update.base_cost;
        self.additional_cost = update.additional_cost;
        self.notes = update.normalized_notes();
        self.updated_at = updated_at;
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DailyRecordView<'a> {
    id: &'a str,
    account_id: &'a str,
    record_date: NaiveDate,
    is_taken: bool,
    base_cost: Decimal,
    additional_cost: Decimal,
    notes: Option<&'a str>,
    total_cost: Decimal,
    updated_at: NaiveDateTime,
}

impl Serialize for DailyRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        DailyRecordView {
            id: &self.id,
            account_id: &self.account_id,
            record_date: self.record_date,
            is_taken: self.is_taken,
            base_cost: self.base_cost,
            additional_cost: self.additional_cost,
            notes: self.notes.as_deref(),
            total_cost: self.total_cost(),
            updated_at: self.updated_at,
        }
        .serialize(serializer)
    }
}

/// Row created by month seeding.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDailyRecord {
    pub account_id: String,
    pub record_date: NaiveDate,
    pub is_taken: bool,
    pub base_cost: Decimal,
    pub additional_cost: Decimal,
    pub notes: Option<String>,
}

impl NewDailyRecord {
    /// Default row for one day: taken, account default cost, nothing extra.
    pub fn seeded(account_id: &str, record_date: NaiveDate, default_daily_cost: Decimal) -> Self {
        Self {
            account_id: account_id.to_string(),
            record_date,
            is_taken: true,
            base_cost: default_daily_cost,
            additional_cost: Decimal::ZERO,
            notes: None,
        }
    }
}

/// The four mutable fields of a daily record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecordUpdate {
    pub is_taken: bool,
    pub base_cost: Decimal,
    pub additional_cost: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DailyRecordUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_non_negative("baseCost", self.base_cost)?;
        validate_non_negative("additionalCost", self.additional_cost)?;
        Ok(())
    }

    /// Blank notes are stored as absent.
    pub fn normalized_notes(&self) -> Option<String> {
        self.notes
            .as_ref()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
    }
}

/// Outcome of seeding one month.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeedResult {
    pub year: i32,
    pub month: u32,
    /// Calendar days in the month.
    pub total_days: u32,
    /// Rows inserted by this call; zero when the month was already complete.
    pub created: usize,
}

impl SeedResult {
    pub fn new(month: LedgerMonth, created: usize) -> Self {
        Self {
            year: month.year(),
            month: month.month(),
            total_days: month.days_in_month(),
            created,
        }
    }
}
