//! Accounts module - domain models, services, and traits.

mod accounts_model;
mod accounts_service;
mod accounts_traits;
mod credentials;



pub(crate) use accounts_model::{validate_non_negative, validate_password};
pub use accounts_model::{Account, AccountInsert, NewAccount};
pub use accounts_service::AccountService;
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
pub use credentials::{hash_password, verify_password};
