//! Uniform `{status, body}` envelope returned by every flow.
//!
//! Flows never hand errors to their callers. Each outcome, including collaborator
//! failures, is folded into an [`ApiResponse`] whose status is one of:
//!
//! | constructor      | status | body                    |
//! |------------------|--------|-------------------------|
//! | `ok`             | 200    | payload                 |
//! | `created`        | 201    | payload                 |
//! | `conflict`       | 409    | [`CustomerMessage`]     |
//! | `server_error`   | 500    | message string          |

use http::StatusCode;
use serde::Serialize;

use crate::messages::CustomerMessage;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiBody<T> {
    Payload(T),
    Classification(CustomerMessage),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    status: StatusCode,
    body: ApiBody<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            status: StatusCode::OK,
            body: ApiBody::Payload(payload),
        }
    }

    pub fn created(payload: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body: ApiBody::Payload(payload),
        }
    }

    pub fn conflict(classification: CustomerMessage) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            body: ApiBody::Classification(classification),
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ApiBody::Error(message.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ApiBody<T> {
        &self.body
    }

    pub fn payload(&self) -> Option<&T> {
        match &self.body {
            ApiBody::Payload(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn classification(&self) -> Option<CustomerMessage> {
        match &self.body {
            ApiBody::Classification(classification) => Some(*classification),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.body {
            ApiBody::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn into_parts(self) -> (StatusCode, ApiBody<T>) {
        (self.status, self.body)
    }
}
