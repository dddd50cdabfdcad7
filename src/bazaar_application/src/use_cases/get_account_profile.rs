use bazaar_core::{
    AccountFilter, AccountId, AccountImageRepository, AccountProfile, AccountRepository,
    AccountRepositoryError, CategoryRepository,
};

use crate::profile_loader::{ProfileLoader, ProjectionError};

#[derive(Debug, thiserror::Error)]
pub enum GetAccountProfileError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Account repository error: {0}")]
    AccountRepositoryError(#[from] AccountRepositoryError),
    #[error("Failed to build profile: {0}")]
    ProjectionError(#[from] ProjectionError),
}

/// Get account profile use case - read-only profile lookup
pub struct GetAccountProfileUseCase<'a, A, C, I>
where
    A: AccountRepository,
    C: CategoryRepository,
    I: AccountImageRepository,
{
    account_repository: &'a A,
    category_repository: &'a C,
    image_repository: &'a I,
}

impl<'a, A, C, I> GetAccountProfileUseCase<'a, A, C, I>
where
    A: AccountRepository,
    C: CategoryRepository,
    I: AccountImageRepository,
{
    pub fn new(
        account_repository: &'a A,
        category_repository: &'a C,
        image_repository: &'a I,
    ) -> Self {
        Self {
            account_repository,
            category_repository,
            image_repository,
        }
    }

    #[tracing::instrument(name = "GetAccountProfileUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        account_id: AccountId,
    ) -> Result<AccountProfile, GetAccountProfileError> {
        let account = self
            .account_repository
            .find_one(&AccountFilter::Id(account_id))
            .await?
            .ok_or(GetAccountProfileError::AccountNotFound)?;

        Ok(ProfileLoader::new(self.category_repository, self.image_repository)
            .load(&account)
            .await?)
    }
}
