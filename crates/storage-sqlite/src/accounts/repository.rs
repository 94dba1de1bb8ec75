use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::model::AccountDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::accounts;
use milkbook_core::accounts::{Account, AccountInsert, AccountRepositoryTrait};
use milkbook_core::utils::time_utils::now_naive_utc;
use milkbook_core::Result;

/// Repository for managing account data in the database
pub struct AccountRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AccountRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, new_account: AccountInsert) -> Result<Account> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Account> {
                let row = AccountDB::from_insert(new_account, now_naive_utc());
                let created = diesel::insert_into(accounts::table)
                    .values(&row)
                    .returning(AccountDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(created.into())
            })
            .await
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;
        let account = accounts::table
            .find(account_id)
            .select(AccountDB::as_select())
            .first::<AccountDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(account.into())
    }

    fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        let mut conn = get_connection(&self.pool)?;
        let account = accounts::table
            .filter(accounts::username.eq(username))
            .select(AccountDB::as_select())
            .first::<AccountDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(account.map(Account::from))
    }

    async fn update_password_hash(&self, account_id: &str, password_hash: String) -> Result<()> {
        let account_id = account_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let updated = diesel::update(accounts::table.find(&account_id))
                    .set((
                        accounts::password_hash.eq(password_hash),
                        accounts::updated_at.eq(now_naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(StorageError::from(diesel::result::Error::NotFound).into());
                }
                Ok(())
            })
            .await
    }

    async fn update_default_cost(&self, account_id: &str, cost: Decimal) -> Result<Account> {
        let account_id = account_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Account> {
                let updated = diesel::update(accounts::table.find(&account_id))
                    .set((
                        accounts::default_daily_cost.eq(cost.to_string()),
                        accounts::updated_at.eq(now_naive_utc()),
                    ))
                    .returning(AccountDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(updated.into())
            })
            .await
    }
}
