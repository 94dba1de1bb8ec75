//! SQLite storage implementation for the monthly summary cache.

mod model;
mod repository;

pub use model::MonthlySummaryDB;
pub use repository::SummaryRepository;
