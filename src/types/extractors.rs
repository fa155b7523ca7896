//! Custom extractors for request validation

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::types::AppError;

/// Custom JSON extractor that validates the payload
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // First extract JSON
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| match err {
                JsonRejection::MissingJsonContentType(_) => AppError::new(
                    StatusCode::BAD_REQUEST,
                    "Missing Content-Type: application/json header",
                ),
                _ => AppError::new(StatusCode::BAD_REQUEST, "Invalid JSON payload"),
            })?;

        // Then validate
        payload.validate().map_err(|errors| {
            // Surface the first field error's message
            for (_field, field_errors) in errors.field_errors() {
                if let Some(error) = field_errors.first() {
                    if let Some(message) = &error.message {
                        return AppError::bad_request(message.to_string());
                    }
                }
            }
            AppError::bad_request("Request validation failed")
        })?;

        Ok(Self(payload))
    }
}
