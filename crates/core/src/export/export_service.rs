use log::info;
use serde::Serialize;
use std::sync::Arc;

use super::export_model::{AccountRow, DailyRecordRow, ExportTable, MonthlySummaryRow};
use crate::accounts::AccountRepositoryTrait;
use crate::errors::{Error, Result};
use crate::ledger::LedgerRepositoryTrait;
use crate::summary::SummaryRepositoryTrait;

/// Dumps one account's rows as CSV.
pub struct ExportService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
    summary_repository: Arc<dyn SummaryRepositoryTrait>,
}

impl ExportService {
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        ledger_repository: Arc<dyn LedgerRepositoryTrait>,
        summary_repository: Arc<dyn SummaryRepositoryTrait>,
    ) -> Self {
        Self {
            account_repository,
            ledger_repository,
            summary_repository,
        }
    }

    /// Renders `table` for `account_id`, header row included even when empty.
    pub fn export_csv(&self, account_id: &str, table: ExportTable) -> Result<String> {
        let csv = match table {
            ExportTable::Accounts => {
                let account = self.account_repository.get_by_id(account_id)?;
                write_csv(&[AccountRow::from(&account)])?
            }
            ExportTable::DailyRecords => {
                let records = self.ledger_repository.list_for_account(account_id)?;
                let rows: Vec<DailyRecordRow> = records.iter().map(DailyRecordRow::from).collect();
                write_csv(&rows)?
            }
            ExportTable::MonthlySummaries => {
                let summaries = self.summary_repository.list_for_account(account_id)?;
                let rows: Vec<MonthlySummaryRow> =
                    summaries.iter().map(MonthlySummaryRow::from).collect();
                write_csv(&rows)?
            }
        };
        info!("Exported {} for account {}", table.as_str(), account_id);
        Ok(csv)
    }
}

fn write_csv<T: Serialize + CsvColumns>(rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record(T::COLUMNS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

/// Column names, written on their own when there are no rows to infer them from.
pub(crate) trait CsvColumns {
    const COLUMNS: &'static [&'static str];
}

impl CsvColumns for AccountRow {
    const COLUMNS: &'static [&'static str] =
        &["id", "username", "default_daily_cost", "created_at", "updated_at"];
}

impl CsvColumns for DailyRecordRow {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "account_id",
        "record_date",
        "is_taken",
        "base_cost",
        "additional_cost",
        "total_cost",
        "notes",
        "updated_at",
    ];
}

impl CsvColumns for MonthlySummaryRow {
    const COLUMNS: &'static [&'static str] = &[
        "account_id",
        "year",
        "month",
        "total_days",
        "taken_days",
        "total_amount",
        "calculated_at",
    ];
}
