//! Error types for authorization outcomes

use thiserror::Error;

/// Rejections returned by upload authorization and deletion
///
/// The `Display` strings are the caller-visible messages. Validation
/// rejections are deterministic and safe to surface verbatim; the issuance
/// and deletion variants are deliberately generic, with backend detail
/// logged internally only.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizerError {
    /// Declared MIME type is outside the allow-list
    #[error("File type not allowed")]
    TypeNotAllowed,

    /// Declared size exceeds the ceiling for its size class
    #[error("File size too large")]
    FileTooLarge,

    /// Storage backend failed to issue the presigned URL
    #[error("error generating signed URL")]
    IssuanceFailed,

    /// Storage backend failed to delete the object
    #[error("error deleting s3 object")]
    DeletionFailed,
}
