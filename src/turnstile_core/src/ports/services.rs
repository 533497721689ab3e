use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    password::{Password, PasswordHash},
    token::Token,
    user::UserId,
};

#[derive(Debug, Error)]
#[error("{0}")]
pub struct PasswordHasherError(pub String);

/// Port trait for password hashing and comparison
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;
    async fn compare(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct TokenSignerError(pub String);

/// Port trait for issuing session tokens
pub trait TokenSigner: Send + Sync {
    fn sign(&self, user_id: &UserId) -> Result<Token, TokenSignerError>;
}

/// Port trait for the informational and error messages a flow emits
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

#[async_trait]
impl<T: PasswordHasher + ?Sized> PasswordHasher for Arc<T> {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        (**self).hash(password).await
    }

    async fn compare(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        (**self).compare(password, hash).await
    }
}

impl<T: TokenSigner + ?Sized> TokenSigner for Arc<T> {
    fn sign(&self, user_id: &UserId) -> Result<Token, TokenSignerError> {
        (**self).sign(user_id)
    }
}

impl<T: Logger + ?Sized> Logger for Arc<T> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
