//! Milkbook Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the delivery ledger: accounts
//! with their default daily cost, month seeding, per-day record updates and
//! the monthly aggregation. It is database-agnostic and defines traits that
//! are implemented by the `storage-sqlite` crate.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod summary;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

#[cfg(test)]
pub(crate) mod test_support;
