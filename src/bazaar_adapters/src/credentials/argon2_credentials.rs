use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use bazaar_core::{
    CredentialError, CredentialHasher, CredentialVerifier, Password, PasswordHash, SignInPassword,
};
use secrecy::{ExposeSecret, Secret};

use crate::config::Argon2Settings;

/// Argon2id (v0x13) password hashing. Hashes are stored as PHC strings, so the cost
/// parameters travel with each hash and older hashes keep verifying after a cost change.
#[derive(Debug, Clone)]
pub struct Argon2Credentials {
    params: Params,
}

impl Default for Argon2Credentials {
    fn default() -> Self {
        Self {
            params: Params::DEFAULT,
        }
    }
}

impl Argon2Credentials {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Build from configured cost parameters
    ///
    /// # Arguments
    /// * `settings` - Memory cost in KiB, iteration count and parallelism
    ///
    /// # Returns
    /// Result containing the credentials adapter, or the reason argon2 rejected the parameters
    pub fn from_settings(settings: &Argon2Settings) -> Result<Self, argon2::Error> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )?;
        Ok(Self::new(params))
    }

    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

#[async_trait::async_trait]
impl CredentialHasher for Argon2Credentials {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, CredentialError> {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.hasher();
        let password = password.clone();

        let phc = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| h.to_string())
                    .map_err(|e| CredentialError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| CredentialError::UnexpectedError(e.to_string()))??;

        PasswordHash::try_from(Secret::from(phc))
            .map_err(|e| CredentialError::UnexpectedError(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for Argon2Credentials {
    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        password: &SignInPassword,
        stored: &PasswordHash,
    ) -> Result<bool, CredentialError> {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.hasher();
        let password = password.clone();
        let expected = stored.as_ref().clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected = password_hash::PasswordHash::new(expected.expose_secret())
                    .map_err(|e| CredentialError::MalformedHash(e.to_string()))?;

                let candidate = password.as_ref().expose_secret().as_bytes();
                match hasher.verify_password(candidate, &expected) {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(CredentialError::UnexpectedError(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| CredentialError::UnexpectedError(e.to_string()))?
    }
}
