//! Summary module - monthly aggregation and its cache.

mod summary_model;
mod summary_service;
mod summary_traits;

#[cfg(test)]
mod summary_service_tests;

pub use summary_model::{MonthlySummary, MonthlyTotals};
pub use summary_service::SummaryService;
pub use summary_traits::{SummaryRepositoryTrait, SummaryServiceTrait};
