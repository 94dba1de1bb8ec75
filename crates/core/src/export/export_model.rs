//! Export tables and their CSV row shapes.

use serde::Serialize;
use std::str::FromStr;

use crate::accounts::Account;
use crate::errors::{Error, Result, ValidationError};
use crate::ledger::DailyRecord;
use crate::summary::MonthlySummary;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A table that can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTable {
    Accounts,
    DailyRecords,
    MonthlySummaries,
}

impl ExportTable {
    pub const ALL: [ExportTable; 3] = [
        ExportTable::Accounts,
        ExportTable::DailyRecords,
        ExportTable::MonthlySummaries,
    ];

    /// URL slug, e.g. `daily-records`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportTable::Accounts => "accounts",
            ExportTable::DailyRecords => "daily-records",
            ExportTable::MonthlySummaries => "monthly-summaries",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.as_str().replace('-', "_"))
    }
}

impl FromStr for ExportTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ExportTable::ALL
            .into_iter()
            .find(|table| table.as_str() == s)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown export table '{}'",
                    s
                )))
            })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AccountRow {
    id: String,
    username: String,
    default_daily_cost: String,
    created_at: String,
    updated_at: String,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            username: account.username.clone(),
            default_daily_cost: account.default_daily_cost.to_string(),
            created_at: account.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: account.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct DailyRecordRow {
    id: String,
    account_id: String,
    record_date: String,
    is_taken: bool,
    base_cost: String,
    additional_cost: String,
    total_cost: String,
    notes: String,
    updated_at: String,
}

impl From<&DailyRecord> for DailyRecordRow {
    fn from(record: &DailyRecord) -> Self {
        Self {
            id: record.id.clone(),
            account_id: record.account_id.clone(),
            record_date: record.record_date.to_string(),
            is_taken: record.is_taken,
            base_cost: record.base_cost.to_string(),
            additional_cost: record.additional_cost.to_string(),
            total_cost: record.total_cost().to_string(),
            notes: record.notes.clone().unwrap_or_default(),
            updated_at: record.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MonthlySummaryRow {
    account_id: String,
    year: i32,
    month: u32,
    total_days: i32,
    taken_days: i32,
    total_amount: String,
    calculated_at: String,
}

impl From<&MonthlySummary> for MonthlySummaryRow {
    fn from(summary: &MonthlySummary) -> Self {
        Self {
            account_id: summary.account_id.clone(),
            year: summary.year,
            month: summary.month,
            total_days: summary.total_days,
            taken_days: summary.taken_days,
            total_amount: summary.total_amount.to_string(),
            calculated_at: summary.calculated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
