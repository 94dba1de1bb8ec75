//! Ledger repository and service traits.

use async_trait::async_trait;

use super::ledger_model::{DailyRecord, DailyRecordUpdate, NewDailyRecord, SeedResult};
use super::ledger_month::LedgerMonth;
use crate::errors::Result;

/// Trait defining the contract for daily record persistence.
///
/// Implementations must enforce at most one row per (account, date).
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Inserts every record whose (account, date) slot is still free and
    /// leaves existing rows untouched. All inserts share one transaction.
    ///
    /// Returns the number of rows actually inserted.
    async fn insert_missing(&self, records: Vec<NewDailyRecord>) -> Result<usize>;

    /// Overwrites the mutable fields of a record and refreshes `updated_at`.
    async fn update(&self, record_id: &str, update: DailyRecordUpdate) -> Result<DailyRecord>;

    fn get_by_id(&self, record_id: &str) -> Result<DailyRecord>;

    /// Records of one account inside one month, ordered by date.
    fn list_for_month(&self, account_id: &str, month: &LedgerMonth) -> Result<Vec<DailyRecord>>;

    /// Every record of one account, ordered by date.
    fn list_for_account(&self, account_id: &str) -> Result<Vec<DailyRecord>>;
}

/// Trait defining the contract for ledger service operations.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    /// Ensures a record exists for every day of the month.
    async fn seed_month(&self, account_id: &str, month: u32, year: i32) -> Result<SeedResult>;

    async fn update_record(
        &self,
        record_id: &str,
        update: DailyRecordUpdate,
    ) -> Result<DailyRecord>;

    fn get_records(&self, account_id: &str, month: u32, year: i32) -> Result<Vec<DailyRecord>>;

    fn get_record(&self, record_id: &str) -> Result<DailyRecord>;
}
