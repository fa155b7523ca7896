use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use tracing_subscriber::{fmt, EnvFilter};
use upload_gateway::{
    authorizer::{DeletionAuthorizer, UploadAuthorizer},
    object_storage::ObjectStorage,
    server,
    state::AppState,
    types::Environment,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // JSON format for staging/production log shipping, regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development { .. } => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let object_storage = Arc::new(ObjectStorage::new(
        s3_client,
        environment.s3_bucket(),
        environment.presign_expiry_secs(),
    ));

    let app_state = AppState {
        upload_authorizer: Arc::new(UploadAuthorizer::new(object_storage.clone())),
        deletion_authorizer: Arc::new(DeletionAuthorizer::new(object_storage)),
    };

    server::start(app_state).await
}
