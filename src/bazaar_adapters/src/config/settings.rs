use axum::http::HeaderValue;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{CONFIG_FILE, env, prod};

/// Settings for the account service binary.
///
/// Sources, lowest precedence first: built-in defaults, the optional `config/base.json`,
/// `BAZAAR__*` environment variables, then the plain `DATABASE_URL` and
/// `ACCOUNT_SERVICE_ALLOWED_ORIGINS` variables. A `.env` file is loaded into the process
/// environment before any of them are read.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountServiceSettings {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
    pub argon2: Argon2Settings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

/// Origins allowed to call the service from a browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for AllowedOrigins {
    fn from(origins: Vec<String>) -> Self {
        let origins = origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin, "Ignoring allowed origin that is not a valid header");
                    None
                }
            })
            .collect();
        Self(origins)
    }
}

impl AccountServiceSettings {
    /// Load settings from the environment and the optional config file
    ///
    /// # Returns
    /// Result containing the settings, or the first source or field that failed
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("application.allowed_origins"),
            )
            .set_override_option(
                "postgres.url",
                std::env::var(env::DATABASE_URL_ENV_VAR).ok(),
            )?
            .set_override_option(
                "application.allowed_origins",
                std::env::var(env::ACCOUNT_SERVICE_ALLOWED_ORIGINS_ENV_VAR)
                    .ok()
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(str::to_string)
                            .collect::<Vec<_>>()
                    }),
            )?;

        Self::from_builder(builder)
    }

    /// Apply defaults to an already populated builder and deserialize it.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default(
                "postgres.max_connections",
                prod::POSTGRES_MAX_CONNECTIONS,
            )?
            .set_default("argon2.memory_kib", prod::argon2::MEMORY_KIB)?
            .set_default("argon2.iterations", prod::argon2::ITERATIONS)?
            .set_default("argon2.parallelism", prod::argon2::PARALLELISM)?
            .build()?
            .try_deserialize()
    }
}
