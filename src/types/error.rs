//! Universal error handling for the API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::authorizer::AuthorizerError;

/// Failure envelope returned to callers
///
/// Carries a human-readable but non-sensitive message; backend detail never
/// reaches this type.
#[derive(Debug, Serialize)]
pub struct ApiFailure {
    /// Caller-visible failure message
    failure: String,
}

/// Application error type that wraps the failure envelope
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: ApiFailure,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub fn new(status: StatusCode, failure: impl Into<String>) -> Self {
        Self {
            status,
            inner: ApiFailure {
                failure: failure.into(),
            },
        }
    }

    /// Create a 400 application error
    #[must_use]
    pub fn bad_request(failure: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, failure)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {}", self.inner.failure),
            500..=599 => tracing::error!("Server error: {}", self.inner.failure),
            _ => {}
        }

        (self.status, Json(self.inner)).into_response()
    }
}

/// Convert authorization rejections to application errors
///
/// Validation rejections map to 400 and are safe to surface verbatim;
/// backend failures map to 500 with the generic message only.
impl From<AuthorizerError> for AppError {
    fn from(err: AuthorizerError) -> Self {
        let status = match err {
            AuthorizerError::TypeNotAllowed | AuthorizerError::FileTooLarge => {
                StatusCode::BAD_REQUEST
            }
            AuthorizerError::IssuanceFailed | AuthorizerError::DeletionFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self::new(status, err.to_string())
    }
}
