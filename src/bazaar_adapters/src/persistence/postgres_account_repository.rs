use bazaar_core::{
    Account, AccountFilter, AccountId, AccountPatch, AccountRepository, AccountRepositoryError,
    CategoryId, CompanyName, Email, NewAccount, PasswordHash, ProfileFields,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Postgres, QueryBuilder, Row, postgres::PgRow};

const SELECT_COMPANY: &str = r#"
    SELECT id, email, password_hash, category_id, name, description, phone, address, website,
           created_at
    FROM companies
"#;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        PostgresAccountRepository { pool }
    }
}

#[async_trait::async_trait]
impl AccountRepository for PostgresAccountRepository {
    #[tracing::instrument(name = "Retrieving company from PostgreSQL", skip_all)]
    async fn find_one(
        &self,
        filter: &AccountFilter,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let mut query = QueryBuilder::<Postgres>::new(SELECT_COMPANY);
        push_filter(&mut query, filter);
        query.push(" LIMIT 1");

        let row = query
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AccountRepositoryError::UnexpectedError(e.to_string()))?;

        row.as_ref().map(account_from_row).transpose()
    }

    #[tracing::instrument(name = "Adding company to PostgreSQL", skip_all)]
    async fn create(&self, data: NewAccount) -> Result<Account, AccountRepositoryError> {
        let account = Account::create(data);

        let query = sqlx::query(
            r#"
                INSERT INTO companies
                    (id, email, password_hash, category_id, name, description, phone, address,
                     website, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(*account.id.as_uuid())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_ref().expose_secret())
        .bind(*account.category.as_uuid())
        .bind(account.profile.name.as_str())
        .bind(account.profile.description.as_deref())
        .bind(account.profile.phone.as_deref())
        .bind(account.profile.address.as_deref())
        .bind(account.profile.website.as_deref())
        .bind(account.created_at);

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountRepositoryError::DuplicateEmail;
                }
            }
            AccountRepositoryError::UnexpectedError(e.to_string())
        })?;

        Ok(account)
    }

    #[tracing::instrument(name = "Updating company in PostgreSQL", skip_all)]
    async fn update_one(
        &self,
        filter: &AccountFilter,
        patch: &AccountPatch,
    ) -> Result<(), AccountRepositoryError> {
        if patch.is_empty() {
            return Ok(());
        }

        // Absent patch fields bind NULL and keep the stored value.
        let mut query = QueryBuilder::<Postgres>::new("UPDATE companies SET name = COALESCE(");
        query.push_bind(patch.name.as_ref().map(|name| name.as_str().to_string()));
        query.push(", name), description = COALESCE(");
        query.push_bind(patch.description.clone());
        query.push(", description), phone = COALESCE(");
        query.push_bind(patch.phone.clone());
        query.push(", phone), address = COALESCE(");
        query.push_bind(patch.address.clone());
        query.push(", address), website = COALESCE(");
        query.push_bind(patch.website.clone());
        query.push(", website), category_id = COALESCE(");
        query.push_bind(patch.category.map(|id| *id.as_uuid()));
        query.push(", category_id)");
        push_filter(&mut query, filter);

        query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| AccountRepositoryError::UnexpectedError(e.to_string()))?;

        Ok(())
    }
}

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &AccountFilter) {
    match filter {
        AccountFilter::Id(id) => {
            query.push(" WHERE id = ");
            query.push_bind(*id.as_uuid());
        }
        AccountFilter::Email(email) => {
            query.push(" WHERE email = ");
            query.push_bind(email.as_str().to_string());
        }
    }
}

fn account_from_row(row: &PgRow) -> Result<Account, AccountRepositoryError> {
    let id: uuid::Uuid = row.try_get("id").map_err(unexpected)?;
    let email: String = row.try_get("email").map_err(unexpected)?;
    let password_hash: String = row.try_get("password_hash").map_err(unexpected)?;
    let category_id: uuid::Uuid = row.try_get("category_id").map_err(unexpected)?;
    let name: String = row.try_get("name").map_err(unexpected)?;

    let profile = ProfileFields {
        name: CompanyName::try_from(name).map_err(unexpected)?,
        description: row.try_get("description").map_err(unexpected)?,
        phone: row.try_get("phone").map_err(unexpected)?,
        address: row.try_get("address").map_err(unexpected)?,
        website: row.try_get("website").map_err(unexpected)?,
    };

    Ok(Account {
        id: AccountId::from(id),
        email: Email::try_from(Secret::from(email)).map_err(unexpected)?,
        password_hash: PasswordHash::try_from(Secret::from(password_hash)).map_err(unexpected)?,
        category: CategoryId::from(category_id),
        profile,
        created_at: row.try_get("created_at").map_err(unexpected)?,
    })
}

fn unexpected(e: impl ToString) -> AccountRepositoryError {
    AccountRepositoryError::UnexpectedError(e.to_string())
}
