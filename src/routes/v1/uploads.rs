//! Upload authorization and deletion handlers

use axum::{extract::State, Json};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    state::AppState,
    types::{AppError, ValidatedJson},
};

static CHECKSUM_SHA256_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-f]{64}$").expect("Invalid regex"));

/// Proposed upload metadata; exists only for the duration of one
/// authorization call
#[derive(Debug, Deserialize, Validate)]
pub struct UploadRequest {
    /// Declared MIME type of the file
    pub file_type: String,
    /// Declared size in bytes
    #[validate(range(min = 1, message = "invalid_file_size"))]
    pub file_size: i64,
    /// 64-character lowercase hex SHA-256 of the file content
    pub checksum: String,
}

/// Issued write authorization
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Presigned URL for the direct PUT to storage
    pub url: String,
    /// Validity window in seconds
    pub expires_in_secs: u64,
    /// ISO-8601 UTC timestamp when the URL expires
    pub expires_at: String,
}

/// Deletion request referencing a previously uploaded object
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteRequest {
    /// Object URL or path previously returned by an upload authorization
    #[validate(length(min = 1, message = "invalid_url"))]
    pub url: String,
}

/// Deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Caller-visible confirmation message
    pub success: String,
}

/// Creates a presigned URL for uploading a file directly to S3
///
/// Validates the declared type and size against the upload policy, then
/// issues a short-lived write authorization bound to a freshly generated
/// object key. Repeated calls with identical input produce independent keys
/// and URLs.
///
/// # Errors
///
/// Returns 400 with "File type not allowed" or "File size too large" for
/// policy rejections, and 500 with a generic message when issuance fails
#[instrument(skip(app_state, payload))]
pub async fn create_presigned_upload_url(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UploadRequest>,
) -> Result<Json<UploadResponse>, AppError> {
    info!(
        file_type = %payload.file_type,
        file_size = payload.file_size,
        "received upload authorization request"
    );

    if !CHECKSUM_SHA256_REGEX.is_match(&payload.checksum) {
        return Err(AppError::bad_request("invalid_checksum"));
    }

    let authorization = app_state
        .upload_authorizer
        .authorize(&payload.file_type, payload.file_size, &payload.checksum)
        .await?;

    Ok(Json(UploadResponse {
        url: authorization.url,
        expires_in_secs: authorization.expires_in_secs,
        expires_at: authorization.expires_at.to_rfc3339(),
    }))
}

/// Deletes a previously uploaded object
///
/// The storage key is derived from the final path segment of the supplied
/// reference and the delete is issued immediately against S3.
///
/// # Errors
///
/// Returns 500 with "error deleting s3 object" when the key cannot be
/// derived or the backend call fails
#[instrument(skip(app_state, payload))]
pub async fn delete_upload(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<DeleteRequest>,
) -> Result<Json<DeleteResponse>, AppError> {
    info!("received deletion request");

    app_state.deletion_authorizer.delete(&payload.url).await?;

    Ok(Json(DeleteResponse {
        success: "success deleting object".to_string(),
    }))
}
