use bazaar_core::{
    Category, CategoryClause, CategoryFilter, CategoryId, CategoryRepository,
    CategoryRepositoryError,
};
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        PostgresCategoryRepository { pool }
    }
}

#[async_trait::async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    /// Runs every clause of the filter as a single `OR` query so that a title and an id
    /// naming different categories resolve to exactly one row.
    #[tracing::instrument(name = "Retrieving category from PostgreSQL", skip_all)]
    async fn find_one(
        &self,
        filter: &CategoryFilter,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        if filter.clauses().is_empty() {
            return Ok(None);
        }

        let mut query = QueryBuilder::<Postgres>::new("SELECT id, title FROM categories WHERE ");
        {
            let mut clauses = query.separated(" OR ");
            for clause in filter.clauses() {
                match clause {
                    CategoryClause::Title(title) => {
                        clauses.push("title = ");
                        clauses.push_bind_unseparated(title.clone());
                    }
                    CategoryClause::Id(id) => {
                        clauses.push("id = ");
                        clauses.push_bind_unseparated(*id.as_uuid());
                    }
                }
            }
        }
        query.push(" ORDER BY created_at, id LIMIT 1");

        let row = query
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CategoryRepositoryError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: uuid::Uuid = row
            .try_get("id")
            .map_err(|e| CategoryRepositoryError::UnexpectedError(e.to_string()))?;
        let title: String = row
            .try_get("title")
            .map_err(|e| CategoryRepositoryError::UnexpectedError(e.to_string()))?;

        Ok(Some(Category {
            id: CategoryId::from(id),
            title,
        }))
    }
}
