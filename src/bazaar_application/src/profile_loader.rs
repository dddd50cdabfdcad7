use bazaar_core::{
    Account, AccountImageRepository, AccountImageRepositoryError, AccountProfile, CategoryFilter,
    CategoryRepository, CategoryRepositoryError,
};

#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("Category repository error: {0}")]
    CategoryRepositoryError(#[from] CategoryRepositoryError),
    #[error("Image repository error: {0}")]
    AccountImageRepositoryError(#[from] AccountImageRepositoryError),
}

/// Gathers what [`AccountProfile::project`] needs for one account and projects it.
pub struct ProfileLoader<'a, C, I>
where
    C: CategoryRepository,
    I: AccountImageRepository,
{
    category_repository: &'a C,
    image_repository: &'a I,
}

impl<'a, C, I> ProfileLoader<'a, C, I>
where
    C: CategoryRepository,
    I: AccountImageRepository,
{
    pub fn new(category_repository: &'a C, image_repository: &'a I) -> Self {
        Self {
            category_repository,
            image_repository,
        }
    }

    #[tracing::instrument(name = "ProfileLoader::load", skip_all, fields(account_id = %account.id))]
    pub async fn load(&self, account: &Account) -> Result<AccountProfile, ProjectionError> {
        let category = self
            .category_repository
            .find_one(&CategoryFilter::by_id(account.category))
            .await?;
        let images = self.image_repository.find_by_account(&account.id).await?;

        Ok(AccountProfile::project(account, category.as_ref(), &images))
    }
}
