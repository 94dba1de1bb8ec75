//! In-memory repositories shared by the service tests.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::accounts::{Account, AccountInsert, AccountRepositoryTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::ledger::{
    DailyRecord, DailyRecordUpdate, LedgerMonth, LedgerRepositoryTrait, NewDailyRecord,
};
use crate::summary::{MonthlySummary, SummaryRepositoryTrait};
use crate::utils::time_utils::now_naive_utc;

#[derive(Default)]
struct Tables {
    accounts: Vec<Account>,
    records: Vec<DailyRecord>,
    summaries: BTreeMap<(String, i32, u32), MonthlySummary>,
}

/// One store implementing every repository trait, so services wired to it
/// see each other's writes.
#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_count(&self) -> usize {
        self.tables.lock().unwrap().records.len()
    }

    pub fn summary_count(&self) -> usize {
        self.tables.lock().unwrap().summaries.len()
    }
}

fn not_found(what: &str, id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!("{what} {id} not found")))
}

#[async_trait]
impl AccountRepositoryTrait for InMemoryStore {
    async fn create(&self, new_account: AccountInsert) -> Result<Account> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .accounts
            .iter()
            .any(|a| a.username == new_account.username)
        {
            return Err(Error::Database(DatabaseError::UniqueViolation(
                "accounts.username".to_string(),
            )));
        }
        let now = now_naive_utc();
        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            username: new_account.username,
            password_hash: new_account.password_hash,
            default_daily_cost: new_account.default_daily_cost,
            created_at: now,
            updated_at: now,
        };
        tables.accounts.push(account.clone());
        Ok(account)
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        let tables = self.tables.lock().unwrap();
        tables
            .accounts
            .iter()
            .find(|a| a.id == account_id)
            .cloned()
            .ok_or_else(|| not_found("Account", account_id))
    }

    fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .accounts
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn update_password_hash(&self, account_id: &str, password_hash: String) -> Result<()> {
        let mut tables = self.tables.lock().unwrap();
        let account = tables
            .accounts
            .iter_mut()
            .find(|a| a.id == account_id)
            .ok_or_else(|| not_found("Account", account_id))?;
        account.password_hash = password_hash;
        account.updated_at = now_naive_utc();
        Ok(())
    }

    async fn update_default_cost(&self, account_id: &str, cost: Decimal) -> Result<Account> {
        let mut tables = self.tables.lock().unwrap();
        let account = tables
            .accounts
            .iter_mut()
            .find(|a| a.id == account_id)
            .ok_or_else(|| not_found("Account", account_id))?;
        account.default_daily_cost = cost;
        account.updated_at = now_naive_utc();
        Ok(account.clone())
    }
}

#[async_trait]
impl LedgerRepositoryTrait for InMemoryStore {
    async fn insert_missing(&self, records: Vec<NewDailyRecord>) -> Result<usize> {
        let mut tables = self.tables.lock().unwrap();
        let mut created = 0;
        for new in records {
            let exists = tables
                .records
                .iter()
                .any(|r| r.account_id == new.account_id && r.record_date == new.record_date);
            if exists {
                continue;
            }
            tables.records.push(DailyRecord::new(
                uuid::Uuid::new_v4().to_string(),
                new.account_id,
                new.record_date,
                new.is_taken,
                new.base_cost,
                new.additional_cost,
                new.notes,
                now_naive_utc(),
            ));
            created += 1;
        }
        Ok(created)
    }

    async fn update(&self, record_id: &str, update: DailyRecordUpdate) -> Result<DailyRecord> {
        let mut tables = self.tables.lock().unwrap();
        let record = tables
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| not_found("Daily record", record_id))?;
        record.apply(&update, now_naive_utc());
        Ok(record.clone())
    }

    fn get_by_id(&self, record_id: &str) -> Result<DailyRecord> {
        let tables = self.tables.lock().unwrap();
        tables
            .records
            .iter()
            .find(|r| r.id == record_id)
            .cloned()
            .ok_or_else(|| not_found("Daily record", record_id))
    }

    fn list_for_month(&self, account_id: &str, month: &LedgerMonth) -> Result<Vec<DailyRecord>> {
        let mut records: Vec<DailyRecord> =
            LedgerRepositoryTrait::list_for_account(self, account_id)?
                .into_iter()
                .filter(|r| month.contains(r.record_date))
                .collect();
        records.sort_by_key(|r| r.record_date);
        Ok(records)
    }

    fn list_for_account(&self, account_id: &str) -> Result<Vec<DailyRecord>> {
        let tables = self.tables.lock().unwrap();
        let mut records: Vec<DailyRecord> = tables
            .records
            .iter()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.record_date);
        Ok(records)
    }
}

#[async_trait]
impl SummaryRepositoryTrait for InMemoryStore {
    async fn upsert(&self, summary: MonthlySummary) -> Result<MonthlySummary> {
        let mut tables = self.tables.lock().unwrap();
        let key = (summary.account_id.clone(), summary.year, summary.month);
        tables.summaries.insert(key, summary.clone());
        Ok(summary)
    }

    fn get(&self, account_id: &str, month: &LedgerMonth) -> Result<Option<MonthlySummary>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .summaries
            .get(&(account_id.to_string(), month.year(), month.month()))
            .cloned())
    }

    fn list_for_account(&self, account_id: &str) -> Result<Vec<MonthlySummary>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .summaries
            .values()
            .filter(|s| s.account_id == account_id)
            .cloned()
            .collect())
    }
}
