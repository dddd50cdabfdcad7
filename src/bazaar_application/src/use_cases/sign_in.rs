use bazaar_core::{
    AccountFilter, AccountImageRepository, AccountRepository, AccountRepositoryError,
    CategoryRepository, CredentialError, CredentialVerifier, Email, Session, SignInPassword,
    TokenIssuer, TokenIssuerError,
};

use crate::profile_loader::{ProfileLoader, ProjectionError};

#[derive(Debug, Clone)]
pub struct SignInData {
    pub email: Email,
    pub password: SignInPassword,
}

/// Error types specific to sign in use case
///
/// An unknown email and a wrong password are reported as different kinds. This reveals
/// whether an email is registered and is accepted as such.
#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account repository error: {0}")]
    AccountRepositoryError(#[from] AccountRepositoryError),
    #[error("Credential error: {0}")]
    CredentialError(#[from] CredentialError),
    #[error("Token issuer error: {0}")]
    TokenIssuerError(#[from] TokenIssuerError),
    #[error("Failed to build profile: {0}")]
    ProjectionError(#[from] ProjectionError),
}

/// Sign in use case - checks credentials and opens an elevated session
pub struct SignInUseCase<'a, A, C, I, T, V>
where
    A: AccountRepository,
    C: CategoryRepository,
    I: AccountImageRepository,
    T: TokenIssuer,
    V: CredentialVerifier,
{
    account_repository: &'a A,
    category_repository: &'a C,
    image_repository: &'a I,
    token_issuer: &'a T,
    credential_verifier: &'a V,
}

impl<'a, A, C, I, T, V> SignInUseCase<'a, A, C, I, T, V>
where
    A: AccountRepository,
    C: CategoryRepository,
    I: AccountImageRepository,
    T: TokenIssuer,
    V: CredentialVerifier,
{
    pub fn new(
        account_repository: &'a A,
        category_repository: &'a C,
        image_repository: &'a I,
        token_issuer: &'a T,
        credential_verifier: &'a V,
    ) -> Self {
        Self {
            account_repository,
            category_repository,
            image_repository,
            token_issuer,
            credential_verifier,
        }
    }

    /// Execute the sign in use case
    ///
    /// # Returns
    /// A fresh elevated session, `AccountNotFound` for an unknown email or
    /// `InvalidCredentials` for a wrong password
    #[tracing::instrument(name = "SignInUseCase::execute", skip_all)]
    pub async fn execute(&self, credentials: SignInData) -> Result<Session, SignInError> {
        let account = self
            .account_repository
            .find_one(&AccountFilter::Email(credentials.email))
            .await?
            .ok_or(SignInError::AccountNotFound)?;

        let matched = self
            .credential_verifier
            .verify(&credentials.password, &account.password_hash)
            .await?;
        if !matched {
            tracing::warn!(account_id = %account.id, "Rejected sign in with wrong password");
            return Err(SignInError::InvalidCredentials);
        }

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
