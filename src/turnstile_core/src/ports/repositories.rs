use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    user::{NewUser, User},
};

// UserRepository port trait and errors
#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("{0}")]
    UnexpectedError(String),
}

impl PartialEq for UserRepositoryError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError>;
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError>;
}

#[async_trait]
impl<T: UserRepository + ?Sized> UserRepository for Arc<T> {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError> {
        (**self).find_by_email(email).await
    }

    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        (**self).create(user).await
    }
}
