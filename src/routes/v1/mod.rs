/// Upload authorization and deletion handlers
pub mod uploads;

use axum::{
    routing::{delete, post},
    Router,
};

use crate::state::AppState;

/// Creates the v1 API router with all v1 handler routes
pub fn handler() -> Router<AppState> {
    Router::new()
        .route(
            "/uploads/presigned-urls",
            post(uploads::create_presigned_upload_url),
        )
        .route("/uploads", delete(uploads::delete_upload))
}
