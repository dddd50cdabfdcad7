use secrecy::{ExposeSecret, Secret};

use super::account::AccountError;

/// One-way hash of an account password, in whatever encoding the credential adapter
/// produces (PHC string for argon2). Never empty.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for PasswordHash {
    type Error = AccountError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(AccountError::EmptyPasswordHash);
        }
        Ok(Self(value))
    }
}
