//! SQLite storage implementation for Milkbook.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `milkbook-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for accounts, daily records and summaries
//! - Database-specific model types (with Diesel derives)
//!
//! Reads go straight to the pool; every write is funnelled through the single
//! writer actor ([`WriteHandle`]) so each operation is one immediate transaction.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod accounts;
pub mod ledger;
pub mod summaries;

#[cfg(test)]
pub(crate) mod testing;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use accounts::AccountRepository;
pub use ledger::LedgerRepository;
pub use summaries::SummaryRepository;

// Re-export from milkbook-core for convenience
pub use milkbook_core::errors::{DatabaseError, Error, Result};
