//! Database model for accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::utils::parse_decimal_tolerant;
use milkbook_core::accounts::{Account, AccountInsert};

/// Database model for accounts
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub default_daily_cost: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl AccountDB {
    /// Row for a fresh account with a new id and both timestamps set to `now`.
    pub fn from_insert(insert: AccountInsert, now: NaiveDateTime) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username: insert.username,
            password_hash: insert.password_hash,
            default_daily_cost: insert.default_daily_cost.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Self {
            default_daily_cost: parse_decimal_tolerant(
                &db.default_daily_cost,
                "default_daily_cost",
            ),
            id: db.id,
            username: db.username,
            password_hash: db.password_hash,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
