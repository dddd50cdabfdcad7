use bazaar_core::{
    Category, CategoryClause, CategoryFilter, CategoryId, CategoryRepository,
    CategoryRepositoryError,
};

#[derive(Debug, thiserror::Error)]
pub enum ResolveCategoryError {
    #[error("No such category")]
    CategoryNotFound,
    #[error("Category repository error: {0}")]
    CategoryRepositoryError(#[from] CategoryRepositoryError),
}

/// Turns a user-supplied category selector into an existing [`Category`].
///
/// The selector always matches on title. If it is also a well-formed category id it may
/// match on id as well; both arms go to the store as one disjunctive lookup, and
/// whichever category the store returns first wins.
pub struct CategoryResolver<'a, C>
where
    C: CategoryRepository,
{
    category_repository: &'a C,
}

impl<'a, C> CategoryResolver<'a, C>
where
    C: CategoryRepository,
{
    pub fn new(category_repository: &'a C) -> Self {
        Self {
            category_repository,
        }
    }

    #[tracing::instrument(name = "CategoryResolver::resolve", skip(self))]
    pub async fn resolve(&self, selector: &str) -> Result<Category, ResolveCategoryError> {
        let filter = selector_filter(selector);

        self.category_repository
            .find_one(&filter)
            .await?
            .ok_or(ResolveCategoryError::CategoryNotFound)
    }
}

/// Build the lookup for a selector: title always, id only when the selector parses as one.
pub fn selector_filter(selector: &str) -> CategoryFilter {
    let mut clauses = vec![CategoryClause::Title(selector.to_owned())];
    if let Ok(id) = selector.parse::<CategoryId>() {
        clauses.push(CategoryClause::Id(id));
    }
    CategoryFilter::any_of(clauses)
}
