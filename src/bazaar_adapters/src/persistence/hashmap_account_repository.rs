use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use bazaar_core::{
    Account, AccountFilter, AccountId, AccountPatch, AccountRepository, AccountRepositoryError,
    NewAccount,
};

/// In-memory account store.
///
/// By default it does not enforce unique emails, so the use case's own check is the only
/// guard. [`HashMapAccountRepository::with_unique_emails`] makes `create` reject a second
/// account for an email, like the unique index on the PostgreSQL table.
#[derive(Default, Clone)]
pub struct HashMapAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
    unique_emails: bool,
}

impl HashMapAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            unique_emails: false,
        }
    }

    pub fn with_unique_emails() -> Self {
        Self {
            unique_emails: true,
            ..Self::new()
        }
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl AccountRepository for HashMapAccountRepository {
    async fn find_one(
        &self,
        filter: &AccountFilter,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let accounts = self.accounts.read().await;
        let found = match filter {
            AccountFilter::Id(id) => accounts.get(id),
            AccountFilter::Email(_) => accounts.values().find(|account| filter.matches(account)),
        };
        Ok(found.cloned())
    }

    async fn create(&self, data: NewAccount) -> Result<Account, AccountRepositoryError> {
        let mut accounts = self.accounts.write().await;
        if self.unique_emails && accounts.values().any(|account| account.email == data.email) {
            return Err(AccountRepositoryError::DuplicateEmail);
        }
        let account = Account::create(data);
        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update_one(
        &self,
        filter: &AccountFilter,
        patch: &AccountPatch,
    ) -> Result<(), AccountRepositoryError> {
        let mut accounts = self.accounts.write().await;
        if let Some(account) = accounts.values_mut().find(|account| filter.matches(account)) {
            account.apply(patch);
        }
        Ok(())
    }
}
