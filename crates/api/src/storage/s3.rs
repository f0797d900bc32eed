//! S3-backed object store.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use super::{ObjectStore, StorageError};
use crate::config::S3Credentials;

/// Provider name attached to static credentials.
const CREDENTIALS_PROVIDER: &str = "folio-env";

/// Uploads objects to a single bucket.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
    public_url: String,
}

impl S3Store {
    /// Build a client for `bucket`.
    ///
    /// A custom `endpoint` (MinIO, R2, Supabase storage) switches to
    /// path-style addressing.
    pub async fn connect(
        bucket: String,
        region: String,
        endpoint: Option<String>,
        public_url: String,
        credentials: Option<S3Credentials>,
    ) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        if let Some(creds) = credentials {
            builder = builder.credentials_provider(Credentials::new(
                creds.access_key_id,
                creds.secret_access_key,
                None,
                None,
                CREDENTIALS_PROVIDER,
            ));
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket,
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StorageError> {
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload(DisplayErrorContext(&e).to_string()))?;
        tracing::debug!(bucket = %self.bucket, key, size, "Uploaded object to S3");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_url)
    }
}
