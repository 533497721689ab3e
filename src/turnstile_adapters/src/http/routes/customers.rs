use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use turnstile_application::RegisterUseCase;
use turnstile_core::{Email, Logger, Password, PasswordHasher, Profile, UserInput, UserRepository};

use super::error::RequestError;
use crate::http::EnvelopeResponse;

// Keys the response payloads own; a profile may not shadow them.
const RESERVED_PROFILE_KEYS: [&str; 3] = ["id", "token", "passwordEncryption"];

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
    /// Any other fields are kept as profile attributes
    #[serde(flatten)]
    pub profile: Profile,
}

#[tracing::instrument(name = "Create customer", skip_all)]
pub async fn create_customer<R, H, L>(
    State(use_case): State<Arc<RegisterUseCase<R, H, L>>>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<impl IntoResponse, RequestError>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
    L: Logger + 'static,
{
    let mut profile = request.profile;
    profile.retain(|key, _| !RESERVED_PROFILE_KEYS.contains(&key.as_str()));

    let input = UserInput {
        name: request.name,
        email: Email::try_from(request.email)?,
        password: Password::try_from(request.password)?,
        profile,
    };

    Ok(EnvelopeResponse(use_case.create(input).await))
}
