//! Application state management

use std::sync::Arc;

use crate::authorizer::{DeletionAuthorizer, UploadAuthorizer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Issues presigned upload authorizations
    pub upload_authorizer: Arc<UploadAuthorizer>,
    /// Performs server-side object deletion
    pub deletion_authorizer: Arc<DeletionAuthorizer>,
}
