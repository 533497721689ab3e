use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::LazyLock,
};

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A customer email address, the unique key of a user record.
#[derive(Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(email: Secret<String>) -> Result<Self, UserError> {
        let candidate = email.expose_secret().trim();
        if candidate.is_empty() {
            return Err(UserError::EmptyEmail);
        }
        if !EMAIL_PATTERN.is_match(candidate) {
            return Err(UserError::InvalidEmail);
        }
        Ok(Self(Secret::new(candidate.to_string())))
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

// Addresses show up in log lines, so Debug keeps the secrecy redaction.
impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Email").field(&self.0).finish()
    }
}
