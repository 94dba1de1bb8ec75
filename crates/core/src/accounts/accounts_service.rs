use log::{debug, info};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::accounts_model::{
    validate_non_negative, validate_password, Account, AccountInsert, NewAccount,
};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use super::credentials::{hash_password, verify_password};
use crate::errors::{Error, Result};

/// Service for registering and authenticating ledger owners
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    async fn register(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        let username = new_account.normalized_username();

        if self.repository.find_by_username(&username)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "Username '{}' is already taken",
                username
            )));
        }

        let insert = AccountInsert {
            password_hash: hash_password(&new_account.password)?,
            default_daily_cost: new_account.effective_daily_cost(),
            username,
        };
        let account = self.repository.create(insert).await?;
        info!("Registered account {} ({})", account.username, account.id);
        Ok(account)
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<Option<Account>> {
        let Some(account) = self.repository.find_by_username(username)? else {
            debug!("Authentication attempt for unknown username");
            return Ok(None);
        };
        if verify_password(password, &account.password_hash)? {
            Ok(Some(account))
        } else {
            debug!("Authentication failed for account {}", account.id);
            Ok(None)
        }
    }

    async fn update_password(&self, account_id: &str, new_password: &str) -> Result<()> {
        validate_password(new_password)?;
        let password_hash = hash_password(new_password)?;
        self.repository
            .update_password_hash(account_id, password_hash)
            .await
    }

    async fn change_password(
        &self,
        account_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<()> {
        let account = self.repository.get_by_id(account_id)?;
        if !verify_password(current_password, &account.password_hash)? {
            return Err(Error::Authentication(
                "Current password is incorrect".to_string(),
            ));
        }
        self.update_password(account_id, new_password).await
    }

    async fn update_default_cost(&self, account_id: &str, cost: Decimal) -> Result<Account> {
        validate_non_negative("defaultDailyCost", cost)?;
        self.repository.update_default_cost(account_id, cost).await
    }

    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.repository.get_by_id(account_id)
    }
}
