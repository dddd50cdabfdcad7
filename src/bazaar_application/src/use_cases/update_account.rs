use bazaar_core::{
    AccountFilter, AccountId, AccountImageRepository, AccountPatch, AccountProfile,
    AccountRepository, AccountRepositoryError, CategoryRepository,
};

use crate::profile_loader::{ProfileLoader, ProjectionError};

/// Error types for update account use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateAccountError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Account repository error: {0}")]
    AccountRepositoryError(#[from] AccountRepositoryError),
    #[error("Failed to build profile: {0}")]
    ProjectionError(#[from] ProjectionError),
}

/// Update account use case - applies a profile patch and returns the updated profile
pub struct UpdateAccountUseCase<'a, A, C, I>
where
    A: AccountRepository,
    C: CategoryRepository,
    I: AccountImageRepository,
{
    account_repository: &'a A,
    category_repository: &'a C,
    image_repository: &'a I,
}

impl<'a, A, C, I> UpdateAccountUseCase<'a, A, C, I>
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

    /// Execute the update account use case
    ///
    /// The patch is written without checking first that the account exists, and a
    /// patched category is not checked against the category store. Whether the account
    /// exists is only known from the re-read afterwards.
    #[tracing::instrument(name = "UpdateAccountUseCase::execute", skip(self, patch))]
    pub async fn execute(
        &self,
        account_id: AccountId,
        patch: AccountPatch,
    ) -> Result<AccountProfile, UpdateAccountError> {
        let filter = AccountFilter::Id(account_id);

        self.account_repository.update_one(&filter, &patch).await?;

        let account = self
            .account_repository
            .find_one(&filter)
            .await?
            .ok_or(UpdateAccountError::AccountNotFound)?;

        Ok(ProfileLoader::new(self.category_repository, self.image_repository)
            .load(&account)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        MockAccountRepository, MockCategoryRepository, MockImageRepository, email,
    };
    use bazaar_core::{
        Category, CategoryId, CompanyName, NewAccount, PasswordHash, ProfileFields,
    };
    use secrecy::Secret;

    async fn seeded(category: &Category) -> (MockAccountRepository, AccountId) {
        let accounts = MockAccountRepository::default();
        let account = accounts
            .create(NewAccount {
                email: email("owner@acme.io"),
                password_hash: PasswordHash::try_from(Secret::from(
                    "plain:password123".to_string(),
                ))
                .unwrap(),
                category: category.id,
                profile: ProfileFields::new(CompanyName::try_from("Acme".to_string()).unwrap()),
            })
            .await
            .unwrap();
        (accounts, account.id)
    }

    #[tokio::test]
    async fn test_update_account_success() {
        let category = Category::new("Plumbing");
        let (accounts, id) = seeded(&category).await;
        let categories = MockCategoryRepository::with(vec![category]);
        let images = MockImageRepository::default();

        let patch = AccountPatch {
            name: Some(CompanyName::try_from("Acme & Sons".to_string()).unwrap()),
            website: Some("https://acme.example".to_string()),
            ..Default::default()
        };
        let profile = UpdateAccountUseCase::new(&accounts, &categories, &images)
            .execute(id, patch)
            .await
            .unwrap();

        assert_eq!(profile.id, id);
        assert_eq!(profile.name, "Acme & Sons");
        assert_eq!(profile.website.as_deref(), Some("https://acme.example"));
        assert_eq!(profile.category_title.as_deref(), Some("Plumbing"));
    }

    #[tokio::test]
    async fn test_update_account_not_found() {
        let category = Category::new("Plumbing");
        let (accounts, _) = seeded(&category).await;
        let categories = MockCategoryRepository::with(vec![category]);
        let images = MockImageRepository::default();

        let result = UpdateAccountUseCase::new(&accounts, &categories, &images)
            .execute(AccountId::new(), AccountPatch::default())
            .await;

        assert!(matches!(result, Err(UpdateAccountError::AccountNotFound)));
    }

    #[tokio::test]
    async fn test_update_account_trusts_patched_category() {
        let category = Category::new("Plumbing");
        let (accounts, id) = seeded(&category).await;
        let categories = MockCategoryRepository::with(vec![category]);
        let images = MockImageRepository::default();
        let unknown = CategoryId::new();

        let profile = UpdateAccountUseCase::new(&accounts, &categories, &images)
            .execute(
                id,
                AccountPatch {
                    category: Some(unknown),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.category_id, unknown);
        assert_eq!(profile.category_title, None);
    }
}
