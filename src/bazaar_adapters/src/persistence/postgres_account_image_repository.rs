use bazaar_core::{
    AccountId, AccountImage, AccountImageId, AccountImageRepository, AccountImageRepositoryError,
};
use sqlx::{PgPool, Row};

pub struct PostgresAccountImageRepository {
    pool: PgPool,
}

impl PostgresAccountImageRepository {
    pub fn new(pool: PgPool) -> Self {
        PostgresAccountImageRepository { pool }
    }
}

#[async_trait::async_trait]
impl AccountImageRepository for PostgresAccountImageRepository {
    #[tracing::instrument(name = "Retrieving company images from PostgreSQL", skip_all)]
    async fn find_by_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<AccountImage>, AccountImageRepositoryError> {
        let rows = sqlx::query(
            r#"
                SELECT id, url
                FROM company_images
                WHERE company_id = $1
                ORDER BY created_at, id
            "#,
        )
        .bind(*account_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountImageRepositoryError::UnexpectedError(e.to_string()))?;

        rows.iter()
            .map(|row| {
                let id: uuid::Uuid = row.try_get("id")?;
                let url: String = row.try_get("url")?;
                Ok(AccountImage {
                    id: AccountImageId::from(id),
                    account_id: *account_id,
                    url,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| AccountImageRepositoryError::UnexpectedError(e.to_string()))
    }
}
