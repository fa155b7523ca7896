//! S3-backed object storage operations
mod error;

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::{presigning::PresigningConfig, types::ChecksumAlgorithm, Client as S3Client};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use hex::FromHex;

pub use error::{StorageError, StorageResult};

/// Presigned upload authorization with expiration information
#[derive(Debug, Clone)]
pub struct PresignedUpload {
    /// The presigned URL for the PUT operation
    pub url: String,
    /// Validity window of the URL in seconds
    pub expires_in_secs: u64,
    /// UTC timestamp when the URL expires
    pub expires_at: DateTime<Utc>,
}

/// Storage client for presigned upload issuance and object deletion
pub struct ObjectStorage {
    s3_client: Arc<S3Client>,
    bucket_name: String,
    presign_expiry_secs: u64,
}

impl ObjectStorage {
    /// Creates a new object storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client, shared across the process
    /// * `bucket_name` - S3 bucket the service manages
    /// * `presign_expiry_secs` - Validity window for presigned URLs in seconds
    #[must_use]
    pub const fn new(
        s3_client: Arc<S3Client>,
        bucket_name: String,
        presign_expiry_secs: u64,
    ) -> Self {
        Self {
            s3_client,
            bucket_name,
            presign_expiry_secs,
        }
    }

    /// Recodes a 64-char hex SHA-256 digest to the base64 form S3 expects
    /// in the `x-amz-checksum-sha256` header
    fn checksum_hex_to_b64(checksum_sha256_hex: &str) -> StorageResult<String> {
        let digest_bytes: [u8; 32] = <[u8; 32]>::from_hex(checksum_sha256_hex)
            .map_err(|e| StorageError::InvalidChecksum(e.to_string()))?;

        Ok(STANDARD.encode(digest_bytes))
    }

    /// Generates a presigned URL for a PUT scoped to the given key, content
    /// type, content length, and checksum commitment
    ///
    /// The checksum is forwarded to S3 for verification against the uploaded
    /// bytes; it is not recomputed here.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidChecksum` if the digest is not 64-char hex
    /// Returns `StorageError::ConfigError` if presigning config creation fails
    /// Returns `StorageError::S3Error` if presigned URL generation fails
    pub async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        content_length: i64,
        checksum_sha256_hex: &str,
    ) -> StorageResult<PresignedUpload> {
        let base64_checksum = Self::checksum_hex_to_b64(checksum_sha256_hex)?;

        let presigned_config =
            PresigningConfig::expires_in(Duration::from_secs(self.presign_expiry_secs)).map_err(
                |e| StorageError::ConfigError(format!("Failed to create presigning config: {e}")),
            )?;

        let presigned_url = self
            .s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .content_type(content_type)
            .content_length(content_length)
            .checksum_sha256(base64_checksum)
            .checksum_algorithm(ChecksumAlgorithm::Sha256)
            .presigned(presigned_config)
            .await?;

        let expires_at: DateTime<Utc> =
            Utc::now() + Duration::from_secs(self.presign_expiry_secs);

        Ok(PresignedUpload {
            url: presigned_url.uri().to_string(),
            expires_in_secs: self.presign_expiry_secs,
            expires_at,
        })
    }

    /// Deletes an object from the bucket
    ///
    /// The delete is issued immediately against S3; it is not a deferred or
    /// presigned operation, and it is not retried.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::S3Error` if the delete call fails
    pub async fn delete_object(&self, key: &str) -> StorageResult<()> {
        self.s3_client
            .delete_object()
            .bucket(&self.bucket_name)
            .key(key)
            .send()
            .await?;

        Ok(())
    }
}
