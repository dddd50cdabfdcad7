use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    access_token::AccessToken,
    ids::AccountId,
    password::{Password, SignInPassword},
    password_hash::PasswordHash,
};

#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for issuing access tokens
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn create_access_token(
        &self,
        elevated: bool,
        account_id: &AccountId,
    ) -> Result<AccessToken, TokenIssuerError>;
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for checking a plaintext password against a stored hash.
///
/// A mismatch is `Ok(false)`; `Err` is reserved for failures of the check itself.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(
        &self,
        password: &SignInPassword,
        password_hash: &PasswordHash,
    ) -> Result<bool, CredentialError>;
}

/// Port trait for producing the one-way hash stored with an account.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialError>;
}
