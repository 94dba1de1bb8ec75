//! Ledger module - daily records, month seeding and record updates.

mod ledger_model;
mod ledger_month;
mod ledger_service;
mod ledger_traits;


pub use ledger_model::{
    derive_total_cost, DailyRecord, DailyRecordUpdate, NewDailyRecord, SeedResult,
};
pub use ledger_month::LedgerMonth;
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
