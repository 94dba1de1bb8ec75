//! Monthly summary repository and service traits.

use async_trait::async_trait;

use super::summary_model::MonthlySummary;
use crate::errors::Result;
use crate::ledger::LedgerMonth;

/// Trait defining the contract for the summary cache.
#[async_trait]
pub trait SummaryRepositoryTrait: Send + Sync {
    /// Inserts the summary or replaces the row with the same
    /// (account, year, month) key.
    async fn upsert(&self, summary: MonthlySummary) -> Result<MonthlySummary>;

    fn get(&self, account_id: &str, month: &LedgerMonth) -> Result<Option<MonthlySummary>>;

    /// Every cached summary of one account, oldest month first.
    fn list_for_account(&self, account_id: &str) -> Result<Vec<MonthlySummary>>;
}

/// Trait defining the contract for monthly aggregation.
#[async_trait]
pub trait SummaryServiceTrait: Send + Sync {
    /// Recomputes the month from its daily records and refreshes the cache.
    async fn summarize(&self, account_id: &str, month: u32, year: i32) -> Result<MonthlySummary>;

    /// Reads the cached summary without recomputing it.
    fn get_cached_summary(
        &self,
        account_id: &str,
        month: u32,
        year: i32,
    ) -> Result<Option<MonthlySummary>>;
}
