use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use turnstile_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};

/// Argon2id hasher. Work runs on the blocking pool so request tasks keep moving.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordHash::new(Secret::from(h.to_string())))
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| PasswordHasherError(e.to_string()))?;

        result.map_err(PasswordHasherError)
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn compare(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let password = password.clone();
        let expected_hash = hash.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_hash = password_hash::PasswordHash::new(
                    expected_hash.as_ref().expose_secret(),
                )
                .map_err(|e| e.to_string())?;

                match argon2()?.verify_password(
                    password.as_ref().expose_secret().as_bytes(),
                    &expected_hash,
                ) {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(e.to_string()),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError(e.to_string()))?;

        result.map_err(PasswordHasherError)
    }
}
