use log::{debug, info};
use std::sync::Arc;

use super::ledger_model::{DailyRecord, DailyRecordUpdate, NewDailyRecord, SeedResult};
use super::ledger_month::LedgerMonth;
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::accounts::AccountRepositoryTrait;
use crate::errors::Result;

/// Service for seeding months and editing daily records.
pub struct LedgerService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    repository: Arc<dyn LedgerRepositoryTrait>,
}

impl LedgerService {
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        repository: Arc<dyn LedgerRepositoryTrait>,
    ) -> Self {
        Self {
            account_repository,
            repository,
        }
    }
}

#[async_trait::async_trait]
impl LedgerServiceTrait for LedgerService {
    async fn seed_month(&self, account_id: &str, month: u32, year: i32) -> Result<SeedResult> {
        let ledger_month = LedgerMonth::new(month, year)?;
        let account = self.account_repository.get_by_id(account_id)?;

        let records: Vec<NewDailyRecord> = ledger_month
            .dates()
            .into_iter()
            .map(|date| NewDailyRecord::seeded(&account.id, date, account.default_daily_cost))
            .collect();

        let created = self.repository.insert_missing(records).await?;
        if created > 0 {
            info!(
                "Seeded {} day(s) of {} for account {}",
                created, ledger_month, account.id
            );
        } else {
            debug!("{} already seeded for account {}", ledger_month, account.id);
        }
        Ok(SeedResult::new(ledger_month, created))
    }

    async fn update_record(
        &self,
        record_id: &str,
        update: DailyRecordUpdate,
    ) -> Result<DailyRecord> {
        update.validate()?;
        let record = self.repository.update(record_id, update).await?;
        debug!(
            "Updated record {} ({}) total {}",
            record.id,
            record.record_date,
            record.total_cost()
        );
        Ok(record)
    }

    fn get_records(&self, account_id: &str, month: u32, year: i32) -> Result<Vec<DailyRecord>> {
        let ledger_month = LedgerMonth::new(month, year)?;
        self.repository.list_for_month(account_id, &ledger_month)
    }

    fn get_record(&self, record_id: &str) -> Result<DailyRecord> {
        self.repository.get_by_id(record_id)
    }
}
