pub mod domain;
pub mod messages;
pub mod ports;
pub mod response;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    password::{Password, PasswordHash},
    token::Token,
    user::{AuthenticatedUser, CreatedUser, NewUser, Profile, User, UserError, UserId, UserInput},
};

pub use ports::{
    repositories::{UserRepository, UserRepositoryError},
    services::{Logger, PasswordHasher, PasswordHasherError, TokenSigner, TokenSignerError},
};

pub use messages::CustomerMessage;
pub use response::{ApiBody, ApiResponse};
