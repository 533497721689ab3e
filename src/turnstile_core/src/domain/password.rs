use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// Plaintext password as supplied by a caller. Never persisted.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(password: Secret<String>) -> Result<Self, UserError> {
        if password.expose_secret().is_empty() {
            return Err(UserError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Stored credential in PHC string format. Write-only from the caller's point of view.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
