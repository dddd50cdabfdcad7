use async_trait::async_trait;
use bazaar_core::{
    AccountId, AccountImageRepository, AccountPatch, AccountProfile, AccountRepository,
    CategoryRepository, CredentialHasher, CredentialVerifier, Session, TokenIssuer,
};

use crate::use_cases::{
    GetAccountProfileError, GetAccountProfileUseCase, SignInData, SignInError, SignInUseCase,
    SignUpData, SignUpError, SignUpUseCase, UpdateAccountError, UpdateAccountUseCase,
};

/// Account provisioning as seen by delivery layers (HTTP routes, jobs, tests).
#[async_trait]
pub trait AccountProvisioning: Send + Sync + 'static {
    async fn sign_up(&self, data: SignUpData) -> Result<Session, SignUpError>;

    async fn sign_in(&self, credentials: SignInData) -> Result<Session, SignInError>;

    async fn update(
        &self,
        account_id: AccountId,
        patch: AccountPatch,
    ) -> Result<AccountProfile, UpdateAccountError>;

    async fn profile(
        &self,
        account_id: AccountId,
    ) -> Result<AccountProfile, GetAccountProfileError>;
}

/// Owns every collaborator the provisioning use cases need and runs one use case per call.
///
/// Collaborators are handed in at construction. The service keeps no state of its own
/// between calls, so one instance can serve any number of concurrent requests.
pub struct AccountProvisioningService<A, C, I, T, P> {
    account_repository: A,
    category_repository: C,
    image_repository: I,
    token_issuer: T,
    credentials: P,
}

impl<A, C, I, T, P> AccountProvisioningService<A, C, I, T, P>
where
    A: AccountRepository,
    C: CategoryRepository,
    I: AccountImageRepository,
    T: TokenIssuer,
    P: CredentialHasher + CredentialVerifier,
{
    /// Create a new AccountProvisioningService
    ///
    /// # Arguments
    /// * `account_repository` - Store for company accounts
    /// * `category_repository` - Read access to business categories
    /// * `image_repository` - Read access to profile images
    /// * `token_issuer` - Issues access tokens
    /// * `credentials` - Hashes and verifies passwords
    pub fn new(
        account_repository: A,
        category_repository: C,
        image_repository: I,
        token_issuer: T,
        credentials: P,
    ) -> Self {
        Self {
            account_repository,
            category_repository,
            image_repository,
            token_issuer,
            credentials,
        }
    }
}

#[async_trait]
impl<A, C, I, T, P> AccountProvisioning for AccountProvisioningService<A, C, I, T, P>
where
    A: AccountRepository + 'static,
    C: CategoryRepository + 'static,
    I: AccountImageRepository + 'static,
    T: TokenIssuer + 'static,
    P: CredentialHasher + CredentialVerifier + 'static,
{
    async fn sign_up(&self, data: SignUpData) -> Result<Session, SignUpError> {
        SignUpUseCase::new(
            &self.account_repository,
            &self.category_repository,
            &self.image_repository,
            &self.token_issuer,
            &self.credentials,
        )
        .execute(data)
        .await
    }

    async fn sign_in(&self, credentials: SignInData) -> Result<Session, SignInError> {
        SignInUseCase::new(
            &self.account_repository,
            &self.category_repository,
            &self.image_repository,
            &self.token_issuer,
            &self.credentials,
        )
        .execute(credentials)
        .await
    }

    async fn update(
        &self,
        account_id: AccountId,
        patch: AccountPatch,
    ) -> Result<AccountProfile, UpdateAccountError> {
        UpdateAccountUseCase::new(
            &self.account_repository,
            &self.category_repository,
            &self.image_repository,
        )
        .execute(account_id, patch)
        .await
    }

    async fn profile(
        &self,
        account_id: AccountId,
    ) -> Result<AccountProfile, GetAccountProfileError> {
        GetAccountProfileUseCase::new(
            &self.account_repository,
            &self.category_repository,
            &self.image_repository,
        )
        .execute(account_id)
        .await
    }
}
