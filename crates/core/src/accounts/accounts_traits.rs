//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::accounts_model::{Account, AccountInsert, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations must enforce username uniqueness in the store itself.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Inserts a new account. A duplicate username surfaces as
    /// `DatabaseError::UniqueViolation`.
    async fn create(&self, new_account: AccountInsert) -> Result<Account>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Looks an account up by its exact (case-sensitive) username.
    fn find_by_username(&self, username: &str) -> Result<Option<Account>>;

    /// Replaces the stored password hash and refreshes `updated_at`.
    async fn update_password_hash(&self, account_id: &str, password_hash: String) -> Result<()>;

    /// Replaces the default daily cost and refreshes `updated_at`.
    async fn update_default_cost(&self, account_id: &str, cost: Decimal) -> Result<Account>;
}

/// Trait defining the contract for Account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Registers a new account. Fails if the username is already taken.
    async fn register(&self, new_account: NewAccount) -> Result<Account>;

    /// Returns the account when the password matches, `None` otherwise.
    fn authenticate(&self, username: &str, password: &str) -> Result<Option<Account>>;

    /// Sets a new password without checking the old one.
    async fn update_password(&self, account_id: &str, new_password: &str) -> Result<()>;

    /// Sets a new password after verifying the current one.
    async fn change_password(
        &self,
        account_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<()>;

    /// Updates the cost used by future month seeding.
    async fn update_default_cost(&self, account_id: &str, cost: Decimal) -> Result<Account>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;
}
