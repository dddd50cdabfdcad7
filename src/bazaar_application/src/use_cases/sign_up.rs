use bazaar_core::{
    AccountFilter, AccountImageRepository, AccountRepository, AccountRepositoryError,
    CategoryRepository, CategoryRepositoryError, CredentialError, CredentialHasher, Email,
    NewAccount, Password, ProfileFields, Session, TokenIssuer, TokenIssuerError,
};

use crate::{
    category_resolver::{CategoryResolver, ResolveCategoryError},
    profile_loader::{ProfileLoader, ProjectionError},
};

/// Registration input. `category` is either a category id or a category title.
#[derive(Debug, Clone)]
pub struct SignUpData {
    pub email: Email,
    pub password: Password,
    pub category: String,
    pub profile: ProfileFields,
}

/// Error types for sign up use case
#[derive(Debug, thiserror::Error)]
pub enum SignUpError {
    #[error("Account with this email already exists")]
    DuplicateAccount,
    #[error("No such category")]
    CategoryNotFound,
    #[error("Account repository error: {0}")]
    AccountRepositoryError(AccountRepositoryError),
    #[error("Category repository error: {0}")]
    CategoryRepositoryError(#[from] CategoryRepositoryError),
    #[error("Credential error: {0}")]
    CredentialError(#[from] CredentialError),
    #[error("Token issuer error: {0}")]
    TokenIssuerError(#[from] TokenIssuerError),
    #[error("Failed to build profile: {0}")]
    ProjectionError(#[from] ProjectionError),
}

impl From<AccountRepositoryError> for SignUpError {
    fn from(error: AccountRepositoryError) -> Self {
        match error {
            AccountRepositoryError::DuplicateEmail => SignUpError::DuplicateAccount,
            other => SignUpError::AccountRepositoryError(other),
        }
    }
}

impl From<ResolveCategoryError> for SignUpError {
    fn from(error: ResolveCategoryError) -> Self {
        match error {
            ResolveCategoryError::CategoryNotFound => SignUpError::CategoryNotFound,
            ResolveCategoryError::CategoryRepositoryError(e) => e.into(),
        }
    }
}

/// Sign up use case - registers a company account and opens an elevated session
pub struct SignUpUseCase<'a, A, C, I, T, H>
where
    A: AccountRepository,
    C: CategoryRepository,
    I: AccountImageRepository,
    T: TokenIssuer,
    H: CredentialHasher,
{
    account_repository: &'a A,
    category_repository: &'a C,
    image_repository: &'a I,
    token_issuer: &'a T,
    credential_hasher: &'a H,
}

impl<'a, A, C, I, T, H> SignUpUseCase<'a, A, C, I, T, H>
where
    A: AccountRepository,
    C: CategoryRepository,
    I: AccountImageRepository,
    T: TokenIssuer,
    H: CredentialHasher,
{
    pub fn new(
        account_repository: &'a A,
        category_repository: &'a C,
        image_repository: &'a I,
        token_issuer: &'a T,
        credential_hasher: &'a H,
    ) -> Self {
        Self {
            account_repository,
            category_repository,
            image_repository,
            token_issuer,
            credential_hasher,
        }
    }

    /// Execute the sign up use case
    ///
    /// Steps run strictly in order and stop at the first failure: email uniqueness
    /// check, category resolution, password hashing, account creation, token issuance.
    /// Nothing already written is rolled back.
    ///
    /// The uniqueness check is a plain read before the write. Two concurrent sign-ups
    /// for one email can both pass it; only a repository that enforces unique emails
    /// stops the second one, which then surfaces as `DuplicateAccount`.
    #[tracing::instrument(name = "SignUpUseCase::execute", skip_all)]
    pub async fn execute(&self, data: SignUpData) -> Result<Session, SignUpError> {
        let existing = self
            .account_repository
            .find_one(&AccountFilter::Email(data.email.clone()))
            .await?;
        if existing.is_some() {
            return Err(SignUpError::DuplicateAccount);
        }

        let category = CategoryResolver::new(self.category_repository)
            .resolve(&data.category)
            .await?;

        let password_hash = self.credential_hasher.hash(&data.password).await?;

        let account = self
            .account_repository
            .create(NewAccount {
                email: data.email,
                password_hash,
                category: category.id,
                profile: data.profile,
            })
            .await?;
        tracing::info!(account_id = %account.id, category_id = %category.id, "Account created");

        let access_token = self
            .token_issuer
            .create_access_token(true, &account.id)
            .await?;

        let profile = ProfileLoader::new(self.category_repository, self.image_repository)
            .load(&account)
            .await?;

        Ok(Session {
            access_token: access_token.id,
            account: profile,
        })
    }
}
