use bazaar_account_service::{AccountService, configure_postgresql, tracing::init_tracing};
use bazaar_adapters::{
    config::AccountServiceSettings,
    credentials::Argon2Credentials,
    persistence::{
        PostgresAccountImageRepository, PostgresAccountRepository, PostgresCategoryRepository,
        PostgresTokenIssuer,
    },
};
use bazaar_application::AccountProvisioningService;
use color_eyre::eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = AccountServiceSettings::load()?;

    let pg_pool = configure_postgresql(&settings.postgres).await?;
    let credentials = Argon2Credentials::from_settings(&settings.argon2)?;

    let provisioning = AccountProvisioningService::new(
        PostgresAccountRepository::new(pg_pool.clone()),
        PostgresCategoryRepository::new(pg_pool.clone()),
        PostgresAccountImageRepository::new(pg_pool.clone()),
        PostgresTokenIssuer::new(pg_pool),
        credentials,
    );

    let allowed_origins = settings.application.allowed_origins.clone();
    let allowed_origins = (!allowed_origins.is_empty()).then_some(allowed_origins);

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    tracing::info!("Starting account service...");

    AccountService::new(provisioning)
        .run_standalone(listener, allowed_origins)
        .await?;

    Ok(())
}
