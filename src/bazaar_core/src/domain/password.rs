use secrecy::{ExposeSecret, Secret};

use super::account::AccountError;

const MIN_PASSWORD_LENGTH: usize = 8;

/// Plaintext password as received from a client. Only ever handed to the credential
/// ports; never persisted.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = AccountError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() >= MIN_PASSWORD_LENGTH {
            Ok(Self(value))
        } else {
            Err(AccountError::InvalidPassword)
        }
    }
}

/// Plaintext password offered at sign in. No length policy applies here; every attempt
/// goes to the credential check.
#[derive(Debug, Clone)]
pub struct SignInPassword(Secret<String>);

impl AsRef<Secret<String>> for SignInPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl From<Secret<String>> for SignInPassword {
    fn from(value: Secret<String>) -> Self {
        Self(value)
    }
}
