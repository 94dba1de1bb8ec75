//! SQLite storage implementation for daily records.

mod model;
mod repository;

pub use model::DailyRecordDB;
pub use repository::LedgerRepository;
