use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use turnstile_application::AuthenticateUseCase;
use turnstile_core::{Email, Logger, Password, PasswordHasher, TokenSigner, UserRepository};

use super::error::RequestError;
use crate::http::EnvelopeResponse;

#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Authenticate", skip_all)]
pub async fn authenticate<R, H, T, L>(
    State(use_case): State<Arc<AuthenticateUseCase<R, H, T, L>>>,
    Json(request): Json<AuthenticateRequest>,
) -> Result<impl IntoResponse, RequestError>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: TokenSigner + 'static,
    L: Logger + 'static,
{
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    Ok(EnvelopeResponse(use_case.authenticate(email, password).await))
}
