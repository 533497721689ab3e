//! Axum rendering of the flow envelope.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use turnstile_core::ApiResponse;

/// Newtype that lets an [`ApiResponse`] be returned straight from an axum handler.
#[derive(Debug)]
pub struct EnvelopeResponse<T>(pub ApiResponse<T>);

impl<T> From<ApiResponse<T>> for EnvelopeResponse<T> {
    fn from(response: ApiResponse<T>) -> Self {
        Self(response)
    }
}

impl<T: Serialize> IntoResponse for EnvelopeResponse<T> {
    fn into_response(self) -> Response {
        let (status, body) = self.0.into_parts();
        (status, Json(body)).into_response()
    }
}
