//! In-memory port doubles shared by the use case tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use bazaar_core::{
    AccessToken, Account, AccountFilter, AccountId, AccountImage, AccountImageRepository,
    AccountImageRepositoryError, AccountPatch, AccountRepository, AccountRepositoryError,
    Category, CategoryFilter, CategoryRepository, CategoryRepositoryError, CompanyName,
    CredentialError, CredentialHasher, CredentialVerifier, Email, NewAccount, Password,
    PasswordHash, ProfileFields, SignInPassword, TokenIssuer, TokenIssuerError,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::{Barrier, RwLock};

use crate::SignUpData;

#[derive(Clone, Default)]
pub struct MockAccountRepository {
    pub accounts: Arc<RwLock<Vec<Account>>>,
    pub enforce_unique_emails: bool,
    /// When set, every email lookup waits here before answering.
    pub email_lookup_barrier: Option<Arc<Barrier>>,
}

impl MockAccountRepository {
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait::async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_one(
        &self,
        filter: &AccountFilter,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        if let (AccountFilter::Email(_), Some(barrier)) = (filter, &self.email_lookup_barrier) {
            barrier.wait().await;
        }
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| filter.matches(a)).cloned())
    }

    async fn create(&self, data: NewAccount) -> Result<Account, AccountRepositoryError> {
        let mut accounts = self.accounts.write().await;
        if self.enforce_unique_emails && accounts.iter().any(|a| a.email == data.email) {
            return Err(AccountRepositoryError::DuplicateEmail);
        }
        let account = Account::create(data);
        accounts.push(account.clone());
        Ok(account)
    }

    async fn update_one(
        &self,
        filter: &AccountFilter,
        patch: &AccountPatch,
    ) -> Result<(), AccountRepositoryError> {
        let mut accounts = self.accounts.write().await;
        if let Some(account) = accounts.iter_mut().find(|a| filter.matches(a)) {
            account.apply(patch);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockCategoryRepository {
    pub categories: Vec<Category>,
    pub lookups: Arc<AtomicUsize>,
    pub filters: Arc<RwLock<Vec<CategoryFilter>>>,
}

impl MockCategoryRepository {
    pub fn with(categories: Vec<Category>) -> Self {
        Self {
            categories,
            ..Default::default()
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn find_one(
        &self,
        filter: &CategoryFilter,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.filters.write().await.push(filter.clone());
        Ok(self.categories.iter().find(|c| filter.matches(c)).cloned())
    }
}

#[derive(Clone, Default)]
pub struct MockImageRepository {
    pub images: Vec<AccountImage>,
}

#[async_trait::async_trait]
impl AccountImageRepository for MockImageRepository {
    async fn find_by_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<AccountImage>, AccountImageRepositoryError> {
        Ok(self
            .images
            .iter()
            .filter(|image| &image.account_id == account_id)
            .cloned()
            .collect())
    }
}

#[derive(Clone, Default)]
pub struct MockTokenIssuer {
    pub tokens: Arc<RwLock<Vec<AccessToken>>>,
}

impl MockTokenIssuer {
    pub async fn count(&self) -> usize {
        self.tokens.read().await.len()
    }
}

#[async_trait::async_trait]
impl TokenIssuer for MockTokenIssuer {
    async fn create_access_token(
        &self,
        elevated: bool,
        account_id: &AccountId,
    ) -> Result<AccessToken, TokenIssuerError> {
        let token = AccessToken::issue(*account_id, elevated);
        self.tokens.write().await.push(token.clone());
        Ok(token)
    }
}

/// Reversible stand-in for a real hash, good enough to tell passwords apart.
#[derive(Clone, Default)]
pub struct PlainCredentials;

#[async_trait::async_trait]
impl CredentialHasher for PlainCredentials {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialError> {
        let hashed = format!("plain:{}", password.as_ref().expose_secret());
        PasswordHash::try_from(Secret::from(hashed))
            .map_err(|e| CredentialError::UnexpectedError(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for PlainCredentials {
    async fn verify(
        &self,
        password: &SignInPassword,
        password_hash: &PasswordHash,
    ) -> Result<bool, CredentialError> {
        let expected = format!("plain:{}", password.as_ref().expose_secret());
        Ok(password_hash.as_ref().expose_secret() == &expected)
    }
}

pub fn email(raw: &str) -> Email {
    Email::try_from(Secret::from(raw.to_string())).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_string())).unwrap()
}

pub fn attempt(raw: &str) -> SignInPassword {
    SignInPassword::from(Secret::from(raw.to_string()))
}

pub fn sign_up_data(raw_email: &str, category: &str) -> SignUpData {
    SignUpData {
        email: email(raw_email),
        password: password("password123"),
        category: category.to_string(),
        profile: ProfileFields::new(CompanyName::try_from("Acme Plumbing".to_string()).unwrap()),
    }
}
