use log::debug;
use std::sync::Arc;

use super::summary_model::{MonthlySummary, MonthlyTotals};
use super::summary_traits::{SummaryRepositoryTrait, SummaryServiceTrait};
use crate::errors::Result;
use crate::ledger::{LedgerMonth, LedgerRepositoryTrait};
use crate::utils::time_utils::now_naive_utc;

/// Aggregates daily records into the monthly summary cache.
pub struct SummaryService {
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
    repository: Arc<dyn SummaryRepositoryTrait>,
}

impl SummaryService {
    pub fn new(
        ledger_repository: Arc<dyn LedgerRepositoryTrait>,
        repository: Arc<dyn SummaryRepositoryTrait>,
    ) -> Self {
        Self {
            ledger_repository,
            repository,
        }
    }
}

#[async_trait::async_trait]
impl SummaryServiceTrait for SummaryService {
    async fn summarize(&self, account_id: &str, month: u32, year: i32) -> Result<MonthlySummary> {
        let ledger_month = LedgerMonth::new(month, year)?;
        let records = self
            .ledger_repository
            .list_for_month(account_id, &ledger_month)?;
        let totals = MonthlyTotals::from_records(&records);
        debug!(
            "Summarized {} for account {}: {}/{} days, {}",
            ledger_month, account_id, totals.taken_days, totals.total_days, totals.total_amount
        );

        let summary = MonthlySummary::new(account_id, ledger_month, totals, now_naive_utc());
        self.repository.upsert(summary).await
    }

    fn get_cached_summary(
        &self,
        account_id: &str,
        month: u32,
        year: i32,
    ) -> Result<Option<MonthlySummary>> {
        let ledger_month = LedgerMonth::new(month, year)?;
        self.repository.get(account_id, &ledger_month)
    }
}
