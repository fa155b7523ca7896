//! Upload and deletion authorization
//!
//! Both authorizers are stateless single-shot operations around a shared
//! [`ObjectStorage`] client; no record of issued authorizations is kept, so
//! expiry and scope enforcement are delegated to the storage backend's
//! signature verification.

mod error;

/// Object key generation and derivation
pub mod keys;

/// Validation policy: type allow-list and size ceilings
pub mod policy;

use std::sync::Arc;

use crate::object_storage::{ObjectStorage, PresignedUpload};

pub use error::AuthorizerError;

/// Validates proposed uploads and issues presigned write authorizations
pub struct UploadAuthorizer {
    storage: Arc<ObjectStorage>,
}

impl UploadAuthorizer {
    /// Creates a new upload authorizer over the shared storage client
    #[must_use]
    pub const fn new(storage: Arc<ObjectStorage>) -> Self {
        Self { storage }
    }

    /// Authorizes a proposed upload
    ///
    /// Validation is applied in order, short-circuiting on first failure:
    /// type allow-list, then the size ceiling for the request's size class.
    /// On acceptance a fresh opaque object key is generated and a presigned
    /// PUT URL is issued, scoped to the key, the declared content type and
    /// length, and the checksum commitment. The checksum is forwarded for
    /// the backend to verify against the uploaded bytes; it is not
    /// recomputed here.
    ///
    /// # Errors
    ///
    /// Returns `AuthorizerError::TypeNotAllowed` for types outside the allow-list
    /// Returns `AuthorizerError::FileTooLarge` when the declared size exceeds its ceiling
    /// Returns `AuthorizerError::IssuanceFailed` when the storage backend fails;
    /// backend detail is logged internally and never surfaced to the caller
    pub async fn authorize(
        &self,
        file_type: &str,
        file_size: i64,
        checksum_sha256: &str,
    ) -> Result<PresignedUpload, AuthorizerError> {
        if !policy::is_allowed_file_type(file_type) {
            return Err(AuthorizerError::TypeNotAllowed);
        }

        let size_class = policy::SizeClass::for_file_type(file_type);
        if file_size > size_class.max_bytes() {
            return Err(AuthorizerError::FileTooLarge);
        }

        let key = keys::generate_object_key();

        match self
            .storage
            .presign_put(&key, file_type, file_size, checksum_sha256)
            .await
        {
            Ok(upload) => Ok(upload),
            Err(err) => {
                tracing::error!(error = %err, "failed to generate presigned upload URL");
                Err(AuthorizerError::IssuanceFailed)
            }
        }
    }
}

/// Performs immediate server-side deletion of previously uploaded objects
pub struct DeletionAuthorizer {
    storage: Arc<ObjectStorage>,
}

impl DeletionAuthorizer {
    /// Creates a new deletion authorizer over the shared storage client
    #[must_use]
    pub const fn new(storage: Arc<ObjectStorage>) -> Self {
        Self { storage }
    }

    /// Deletes the object referenced by a previously issued URL or path
    ///
    /// The storage key is the reference's final path segment. No ownership
    /// check is performed on the derived key. The delete is immediate and
    /// permanent; a failed call is not retried.
    ///
    /// # Errors
    ///
    /// Returns `AuthorizerError::DeletionFailed` when no key can be derived
    /// or the storage backend fails; backend detail is logged internally
    pub async fn delete(&self, reference: &str) -> Result<(), AuthorizerError> {
        let Some(key) = keys::derive_object_key(reference) else {
            tracing::warn!(reference, "object reference has no key segment");
            return Err(AuthorizerError::DeletionFailed);
        };

        if let Err(err) = self.storage.delete_object(key).await {
            tracing::error!(error = %err, key, "failed to delete object");
            return Err(AuthorizerError::DeletionFailed);
        }

        Ok(())
    }
}
