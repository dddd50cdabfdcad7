use bazaar_core::{AccessToken, AccountId, TokenIssuer, TokenIssuerError};
use sqlx::PgPool;

/// Issues opaque access tokens and records them in the `access_tokens` table.
pub struct PostgresTokenIssuer {
    pool: PgPool,
}

impl PostgresTokenIssuer {
    pub fn new(pool: PgPool) -> Self {
        PostgresTokenIssuer { pool }
    }
}

#[async_trait::async_trait]
impl TokenIssuer for PostgresTokenIssuer {
    #[tracing::instrument(name = "Issuing access token", skip(self))]
    async fn create_access_token(
        &self,
        elevated: bool,
        account_id: &AccountId,
    ) -> Result<AccessToken, TokenIssuerError> {
        let token = AccessToken::issue(*account_id, elevated);

        sqlx::query(
            r#"
                INSERT INTO access_tokens (id, company_id, elevated, issued_at)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(*token.id.as_uuid())
        .bind(*token.account_id.as_uuid())
        .bind(token.elevated)
        .bind(token.issued_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TokenIssuerError::UnexpectedError(e.to_string()))?;

        Ok(token)
    }
}
