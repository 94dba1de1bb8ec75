//! Database models for daily records.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::utils::parse_decimal_tolerant;
use milkbook_core::ledger::{DailyRecord, NewDailyRecord};

/// Database model for daily records. The derived total has no column.
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::daily_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DailyRecordDB {
    pub id: String,
    pub account_id: String,
    pub record_date: NaiveDate,
    pub is_taken: bool,
    pub base_cost: String,
    pub additional_cost: String,
    pub notes: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl DailyRecordDB {
    pub fn from_new(new: NewDailyRecord, now: NaiveDateTime) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            account_id: new.account_id,
            record_date: new.record_date,
            is_taken: new.is_taken,
            base_cost: new.base_cost.to_string(),
            additional_cost: new.additional_cost.to_string(),
            notes: new.notes,
            updated_at: now,
        }
    }
}

impl From<DailyRecordDB> for DailyRecord {
    fn from(db: DailyRecordDB) -> Self {
        DailyRecord::new(
            db.id,
            db.account_id,
            db.record_date,
            db.is_taken,
            parse_decimal_tolerant(&db.base_cost, "base_cost"),
            parse_decimal_tolerant(&db.additional_cost, "additional_cost"),
            db.notes,
            db.updated_at,
        )
    }
}
