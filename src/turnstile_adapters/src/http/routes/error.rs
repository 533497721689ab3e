use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use turnstile_core::UserError;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request bodies that never reach a flow.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl From<UserError> for RequestError {
    fn from(error: UserError) -> Self {
        RequestError::InvalidInput(error.to_string())
    }
}
