//! Temp-file database fixtures for repository tests.

use std::sync::Arc;
use tempfile::TempDir;

use crate::db::{create_pool, init, run_migrations, spawn_writer, DbPool, WriteHandle};
use crate::{AccountRepository, LedgerRepository, SummaryRepository};
use milkbook_core::accounts::{Account, AccountInsert, AccountRepositoryTrait};
use rust_decimal::Decimal;

pub(crate) struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    // Keeps the database file alive for the test's duration.
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = dir.path().join("data").join("test.db");
        let db_path = init(&db_path.to_string_lossy()).expect("Failed to init database");
        let pool = create_pool(&db_path).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());
        Self {
            pool,
            writer,
            _dir: dir,
        }
    }

    pub fn accounts(&self) -> AccountRepository {
        AccountRepository::new(Arc::clone(&self.pool), self.writer.clone())
    }

    pub fn ledger(&self) -> LedgerRepository {
        LedgerRepository::new(Arc::clone(&self.pool), self.writer.clone())
    }

    pub fn summaries(&self) -> SummaryRepository {
        SummaryRepository::new(Arc::clone(&self.pool), self.writer.clone())
    }

    pub async fn account(&self, username: &str, cost: Decimal) -> Account {
        self.accounts()
            .create(AccountInsert {
                username: username.to_string(),
                password_hash: "$argon2id$v=19$stub".to_string(),
                default_daily_cost: cost,
            })
            .await
            .expect("Failed to create account")
    }
}
