use secrecy::ExposeSecret;
use turnstile_core::{
    ApiResponse, CreatedUser, CustomerMessage, Logger, NewUser, PasswordHasher,
    PasswordHasherError, UserInput, UserRepository, UserRepositoryError,
};

const UPSTREAM_FAILURE_MESSAGE: &str = "[RegisterUseCase] - error to create the customer";

/// Reasons a registration does not produce a new user
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Duplicate email")]
    DuplicateEmail,
    #[error("{0}")]
    Upstream(String),
}

// A refused insert is a conflict, anything else the store raises is a server error.
impl From<UserRepositoryError> for RegisterError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::UserAlreadyExists => Self::DuplicateEmail,
            UserRepositoryError::UnexpectedError(message) => Self::Upstream(message),
        }
    }
}

impl From<PasswordHasherError> for RegisterError {
    fn from(error: PasswordHasherError) -> Self {
        Self::Upstream(error.to_string())
    }
}

/// Register use case - creates a customer unless the email is already taken
pub struct RegisterUseCase<R, H, L>
where
    R: UserRepository,
    H: PasswordHasher,
    L: Logger,
{
    repository: R,
    hasher: H,
    logger: L,
}

impl<R, H, L> RegisterUseCase<R, H, L>
where
    R: UserRepository,
    H: PasswordHasher,
    L: Logger,
{
    pub fn new(repository: R, hasher: H, logger: L) -> Self {
        Self {
            repository,
            hasher,
            logger,
        }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// 201 with the stored user, 409 when the email is already registered, or 500
    /// carrying the collaborator's error message.
    #[tracing::instrument(name = "RegisterUseCase::create", skip_all)]
    pub async fn create(&self, input: UserInput) -> ApiResponse<CreatedUser> {
        let address = input.email.as_ref().expose_secret().clone();

        match self.try_create(input).await {
            Ok(user) => ApiResponse::created(user),
            Err(RegisterError::DuplicateEmail) => {
                self.logger
                    .info(&format!("User already exists with email {address}"));
                ApiResponse::conflict(CustomerMessage::DuplicateEmail)
            }
            Err(RegisterError::Upstream(message)) => {
                self.logger.error(UPSTREAM_FAILURE_MESSAGE);
                ApiResponse::server_error(message)
            }
        }
    }

    async fn try_create(&self, input: UserInput) -> Result<CreatedUser, RegisterError> {
        let existing = self
            .repository
            .find_by_email(&input.email)
            .await
            .map_err(|e| RegisterError::Upstream(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterError::DuplicateEmail);
        }

        let password_hash = self.hasher.hash(&input.password).await?;

        let user = self
            .repository
            .create(NewUser {
                name: input.name,
                email: input.email,
                password_hash,
                profile: input.profile,
            })
            .await?;

        Ok(CreatedUser::from(user))
    }
}
