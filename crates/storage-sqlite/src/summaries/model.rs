//! Database model for the monthly summary cache.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::utils::parse_decimal_tolerant;
use milkbook_core::summary::MonthlySummary;

#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::monthly_summaries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MonthlySummaryDB {
    pub account_id: String,
    pub year: i32,
    pub month: i32,
    pub total_days: i32,
    pub taken_days: i32,
    pub total_amount: String,
    pub calculated_at: NaiveDateTime,
}

impl From<&MonthlySummary> for MonthlySummaryDB {
    fn from(summary: &MonthlySummary) -> Self {
        Self {
            account_id: summary.account_id.clone(),
            year: summary.year,
            month: summary.month as i32,
            total_days: summary.total_days,
            taken_days: summary.taken_days,
            total_amount: summary.total_amount.to_string(),
            calculated_at: summary.calculated_at,
        }
    }
}

impl From<MonthlySummaryDB> for MonthlySummary {
    fn from(db: MonthlySummaryDB) -> Self {
        Self {
            total_amount: parse_decimal_tolerant(&db.total_amount, "total_amount"),
            account_id: db.account_id,
            year: db.year,
            month: db.month as u32,
            total_days: db.total_days,
            taken_days: db.taken_days,
            calculated_at: db.calculated_at,
        }
    }
}
