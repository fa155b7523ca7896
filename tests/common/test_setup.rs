use std::sync::Arc;

use aws_config::{retry::RetryConfig, BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::Client as S3Client;
use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;
use upload_gateway::{
    authorizer::{DeletionAuthorizer, UploadAuthorizer},
    object_storage::ObjectStorage,
    routes,
    state::AppState,
};

pub const TEST_BUCKET: &str = "upload-gateway-test";
pub const TEST_PRESIGN_EXPIRY_SECS: u64 = 60;

/// S3 client with static test credentials
///
/// Presigning is local SigV4 computation, so upload-authorization tests run
/// fully offline. Deletion tests pass an endpoint override so the single
/// delete round trip targets a known address.
pub fn test_s3_client(endpoint_url: Option<&str>) -> S3Client {
    let credentials = Credentials::from_keys("AKIDEXAMPLE", "notrealsecretkey", None);

    let mut builder = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .retry_config(RetryConfig::disabled());

    if let Some(endpoint) = endpoint_url {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    S3Client::from_conf(builder.build())
}

/// Router with real authorizers over the test S3 client
pub fn test_router(endpoint_url: Option<&str>) -> Router {
    let s3_client = Arc::new(test_s3_client(endpoint_url));
    let object_storage = Arc::new(ObjectStorage::new(
        s3_client,
        TEST_BUCKET.to_string(),
        TEST_PRESIGN_EXPIRY_SECS,
    ));

    let app_state = AppState {
        upload_authorizer: Arc::new(UploadAuthorizer::new(object_storage.clone())),
        deletion_authorizer: Arc::new(DeletionAuthorizer::new(object_storage)),
    };

    routes::handler().with_state(app_state)
}

pub async fn send_post_request(router: &Router, route: &str, payload: serde_json::Value) -> Response {
    send_json_request(router, "POST", route, payload).await
}

pub async fn send_delete_request(
    router: &Router,
    route: &str,
    payload: serde_json::Value,
) -> Response {
    send_json_request(router, "DELETE", route, payload).await
}

pub async fn send_get_request(router: &Router, route: &str) -> Response {
    let request = Request::builder()
        .uri(route)
        .method("GET")
        .body(Body::empty())
        .expect("failed to build request");

    router.clone().oneshot(request).await.expect("request failed")
}

async fn send_json_request(
    router: &Router,
    method: &str,
    route: &str,
    payload: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .uri(route)
        .method(method)
        .header("Content-Type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("failed to build request");

    router.clone().oneshot(request).await.expect("request failed")
}
