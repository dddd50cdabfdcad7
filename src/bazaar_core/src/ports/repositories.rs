use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, AccountFilter, AccountPatch, NewAccount},
    account_image::AccountImage,
    category::{Category, CategoryFilter},
    ids::AccountId,
};

// AccountRepository port trait and errors
#[derive(Debug, Error)]
pub enum AccountRepositoryError {
    /// The store itself refused a second account with the same email.
    #[error("Account with this email already exists")]
    DuplicateEmail,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountRepositoryError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateEmail, Self::DuplicateEmail) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_one(&self, filter: &AccountFilter)
    -> Result<Option<Account>, AccountRepositoryError>;
    async fn create(&self, data: NewAccount) -> Result<Account, AccountRepositoryError>;
    /// Apply `patch` to the account matching `filter`. Matching nothing is not an error.
    async fn update_one(
        &self,
        filter: &AccountFilter,
        patch: &AccountPatch,
    ) -> Result<(), AccountRepositoryError>;
}

// CategoryRepository port trait and errors
#[derive(Debug, Error)]
pub enum CategoryRepositoryError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// First category matching any clause of `filter`, in store order.
    async fn find_one(
        &self,
        filter: &CategoryFilter,
    ) -> Result<Option<Category>, CategoryRepositoryError>;
}

// AccountImageRepository port trait and errors
#[derive(Debug, Error)]
pub enum AccountImageRepositoryError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait AccountImageRepository: Send + Sync {
    async fn find_by_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<AccountImage>, AccountImageRepositoryError>;
}
