use secrecy::ExposeSecret;
use turnstile_core::{
    ApiResponse, AuthenticatedUser, CustomerMessage, Email, Logger, Password, PasswordHasher,
    PasswordHasherError, TokenSigner, TokenSignerError, UserRepository, UserRepositoryError,
};

const UPSTREAM_FAILURE_MESSAGE: &str = "[AuthenticateUseCase] - error to compare the password";

/// Reasons an authentication attempt does not produce a token
#[derive(Debug, thiserror::Error)]
pub enum AuthenticateError {
    #[error("User not found")]
    NotFound,
    #[error("Email or password incorrect")]
    InvalidCredential,
    #[error("{0}")]
    Upstream(String),
}

impl From<UserRepositoryError> for AuthenticateError {
    fn from(error: UserRepositoryError) -> Self {
        Self::Upstream(error.to_string())
    }
}

impl From<PasswordHasherError> for AuthenticateError {
    fn from(error: PasswordHasherError) -> Self {
        Self::Upstream(error.to_string())
    }
}

impl From<TokenSignerError> for AuthenticateError {
    fn from(error: TokenSignerError) -> Self {
        Self::Upstream(error.to_string())
    }
}

/// Authenticate use case - verifies credentials and issues a session token
pub struct AuthenticateUseCase<R, H, T, L>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenSigner,
    L: Logger,
{
    repository: R,
    hasher: H,
    signer: T,
    logger: L,
}

impl<R, H, T, L> AuthenticateUseCase<R, H, T, L>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenSigner,
    L: Logger,
{
    pub fn new(repository: R, hasher: H, signer: T, logger: L) -> Self {
        Self {
            repository,
            hasher,
            signer,
            logger,
        }
    }

    /// Execute the authenticate use case
    ///
    /// # Arguments
    /// * `email` - Address the customer registered with
    /// * `password` - Plaintext password to check against the stored hash
    ///
    /// # Returns
    /// 200 with the user and its token, 409 with a classification when the
    /// credentials are rejected, or 500 carrying the collaborator's error message.
    #[tracing::instrument(name = "AuthenticateUseCase::authenticate", skip(self, password))]
    pub async fn authenticate(
        &self,
        email: Email,
        password: Password,
    ) -> ApiResponse<AuthenticatedUser> {
        match self.try_authenticate(&email, &password).await {
            Ok(user) => ApiResponse::ok(user),
            Err(AuthenticateError::NotFound) => {
                self.logger.info(&format!(
                    "User not found with email {}",
                    email.as_ref().expose_secret()
                ));
                ApiResponse::conflict(CustomerMessage::NotFoundUser)
            }
            Err(AuthenticateError::InvalidCredential) => {
                self.logger.info("the password is incorrect");
                ApiResponse::conflict(CustomerMessage::EmailOrPassword)
            }
            Err(AuthenticateError::Upstream(message)) => {
                self.logger.error(UPSTREAM_FAILURE_MESSAGE);
                ApiResponse::server_error(message)
            }
        }
    }

    async fn try_authenticate(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<AuthenticatedUser, AuthenticateError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AuthenticateError::NotFound)?;

        if !self.hasher.compare(password, user.password_hash()).await? {
            return Err(AuthenticateError::InvalidCredential);
        }

        let token = self.signer.sign(&user.id())?;

        Ok(AuthenticatedUser::from_user(user, token))
    }
}
