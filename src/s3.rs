use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

/// Write-side operations the gateway needs from its object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store a blob under `bucket`/`key`, overwriting any existing object.
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()>;
}

/// S3 client wrapper
///
/// Credentials, region, and endpoint come from the standard SDK
/// environment (env vars, shared config, instance metadata).
#[derive(Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .with_context(|| format!("PutObject to bucket '{}' failed", bucket))?;

        tracing::debug!("Stored object {} in bucket {}", key, bucket);
        Ok(())
    }
}
