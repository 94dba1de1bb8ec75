use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::MonthlySummaryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::monthly_summaries;
use milkbook_core::ledger::LedgerMonth;
use milkbook_core::summary::{MonthlySummary, SummaryRepositoryTrait};
use milkbook_core::Result;

pub struct SummaryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SummaryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl SummaryRepositoryTrait for SummaryRepository {
    async fn upsert(&self, summary: MonthlySummary) -> Result<MonthlySummary> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<MonthlySummary> {
                diesel::replace_into(monthly_summaries::table)
                    .values(&MonthlySummaryDB::from(&summary))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(summary)
            })
            .await
    }

    fn get(&self, account_id: &str, month: &LedgerMonth) -> Result<Option<MonthlySummary>> {
        let mut conn = get_connection(&self.pool)?;
        let summary = monthly_summaries::table
            .find((account_id, month.year(), month.month() as i32))
            .select(MonthlySummaryDB::as_select())
            .first::<MonthlySummaryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(summary.map(MonthlySummary::from))
    }

    fn list_for_account(&self, account_id: &str) -> Result<Vec<MonthlySummary>> {
        let mut conn = get_connection(&self.pool)?;
        let summaries = monthly_summaries::table
            .filter(monthly_summaries::account_id.eq(account_id))
            .order((monthly_summaries::year.asc(), monthly_summaries::month.asc()))
            .select(MonthlySummaryDB::as_select())
            .load::<MonthlySummaryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(summaries.into_iter().map(MonthlySummary::from).collect())
    }
}
