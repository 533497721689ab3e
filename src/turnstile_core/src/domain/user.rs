use std::fmt;

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::{
    email::Email,
    password::{Password, PasswordHash},
    token::Token,
};

/// Arbitrary profile attributes stored alongside the fixed user fields.
pub type Profile = Map<String, Value>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Email must not be empty")]
    EmptyEmail,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must not be empty")]
    EmptyPassword,
}

/// Identifier assigned by the repository when a user is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted user record, including its credential hash.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: String,
    email: Email,
    password_hash: PasswordHash,
    profile: Profile,
}

impl User {
    pub fn new(
        id: UserId,
        name: String,
        email: Email,
        password_hash: PasswordHash,
        profile: Profile,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            profile,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}

/// Registration input as received from a caller, password still in plaintext.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub name: String,
    pub email: Email,
    pub password: Password,
    pub profile: Profile,
}

/// A user ready to be persisted. The repository assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub profile: Profile,
}

impl NewUser {
    /// Build the persisted record once the repository has assigned an id.
    pub fn with_id(self, id: UserId) -> User {
        User::new(id, self.name, self.email, self.password_hash, self.profile)
    }
}

/// Authentication payload: the stored user without its credential, plus a session token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: Profile,
    pub token: Token,
}

impl AuthenticatedUser {
    pub fn from_user(user: User, token: Token) -> Self {
        let CreatedUser {
            id,
            name,
            email,
            profile,
        } = CreatedUser::from(user);
        Self {
            id,
            name,
            email,
            profile,
            token,
        }
    }
}

/// Registration payload: the newly stored user without its credential.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: Profile,
}

impl From<User> for CreatedUser {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            profile,
            ..
        } = user;
        Self {
            id,
            name,
            email: email.as_ref().expose_secret().clone(),
            profile,
        }
    }
}
