//! Account domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DAILY_COST;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a ledger owner.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub username: String,
    /// Argon2 PHC string; never leaves the process.
    #[serde(skip)]
    pub password_hash: String,
    /// Base cost written into every row created by month seeding.
    pub default_daily_cost: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for registering a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub default_daily_cost: Option<Decimal>,
}

impl NewAccount {
    /// Validates the registration data.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Username cannot be empty".to_string(),
            )));
        }
        validate_password(&self.password)?;
        if let Some(cost) = self.default_daily_cost {
            validate_non_negative("defaultDailyCost", cost)?;
        }
        Ok(())
    }

    /// Username as it is stored: surrounding whitespace removed, case kept.
    pub fn normalized_username(&self) -> String {
        self.username.trim().to_string()
    }

    pub fn effective_daily_cost(&self) -> Decimal {
        self.default_daily_cost.unwrap_or(DEFAULT_DAILY_COST)
    }
}

/// Row handed to the repository once the password has been hashed.
#[derive(Debug, Clone)]
pub struct AccountInsert {
    pub username: String,
    pub password_hash: String,
    pub default_daily_cost: Decimal,
}

pub(crate) fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Password cannot be empty".to_string(),
        )));
    }
    Ok(())
}

/// Rejects amounts below zero. Shared by the account and ledger models.
pub(crate) fn validate_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(Error::Validation(ValidationError::NegativeAmount {
            field: field.to_string(),
            value: value.to_string(),
        }));
    }
    Ok(())
}
