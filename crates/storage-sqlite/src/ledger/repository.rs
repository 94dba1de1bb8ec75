use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::DailyRecordDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::daily_records;
use milkbook_core::ledger::{
    DailyRecord, DailyRecordUpdate, LedgerMonth, LedgerRepositoryTrait, NewDailyRecord,
};
use milkbook_core::utils::time_utils::now_naive_utc;
use milkbook_core::Result;

pub struct LedgerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LedgerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl LedgerRepositoryTrait for LedgerRepository {
    async fn insert_missing(&self, records: Vec<NewDailyRecord>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let now = now_naive_utc();
                let mut created = 0;
                for record in records {
                    // UNIQUE(account_id, record_date) turns an existing day into a no-op.
                    created += diesel::insert_or_ignore_into(daily_records::table)
                        .values(&DailyRecordDB::from_new(record, now))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(created)
            })
            .await
    }

    async fn update(&self, record_id: &str, update: DailyRecordUpdate) -> Result<DailyRecord> {
        let record_id = record_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<DailyRecord> {
                let updated = diesel::update(daily_records::table.find(&record_id))
                    .set((
                        daily_records::is_taken.eq(update.is_taken),
                        daily_records::base_cost.eq(update.base_cost.to_string()),
                        daily_records::additional_cost.eq(update.additional_cost.to_string()),
                        daily_records::notes.eq(update.normalized_notes()),
                        daily_records::updated_at.eq(now_naive_utc()),
                    ))
                    .returning(DailyRecordDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(updated.into())
            })
            .await
    }

    fn get_by_id(&self, record_id: &str) -> Result<DailyRecord> {
        let mut conn = get_connection(&self.pool)?;
        let record = daily_records::table
            .find(record_id)
            .select(DailyRecordDB::as_select())
            .first::<DailyRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(record.into())
    }

    fn list_for_month(&self, account_id: &str, month: &LedgerMonth) -> Result<Vec<DailyRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let records = daily_records::table
            .filter(daily_records::account_id.eq(account_id))
            .filter(daily_records::record_date.between(month.first_day(), month.last_day()))
            .order(daily_records::record_date.asc())
            .select(DailyRecordDB::as_select())
            .load::<DailyRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(records.into_iter().map(DailyRecord::from).collect())
    }

    fn list_for_account(&self, account_id: &str) -> Result<Vec<DailyRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let records = daily_records::table
            .filter(daily_records::account_id.eq(account_id))
            .order(daily_records::record_date.asc())
            .select(DailyRecordDB::as_select())
            .load::<DailyRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(records.into_iter().map(DailyRecord::from).collect())
    }
}
