//! Object storage for uploaded assets.
//!
//! - [`local::LocalStore`] -- files on disk, served by the API at `/uploads`.
//! - [`s3::S3Store`] -- an S3 bucket or S3-compatible provider.
//!
//! Keys are produced by [`folio_core::upload::object_key`] and are never
//! reused, so neither backend overwrites an existing object on purpose.

pub mod local;
pub mod s3;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{SiteSettings, StorageConfig};

pub use local::LocalStore;
pub use s3::S3Store;

/// Path the local backend is served under.
pub const LOCAL_UPLOADS_PATH: &str = "/uploads";

/// Errors raised by an [`ObjectStore`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Local filesystem failure.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The remote store rejected or failed the upload.
    #[error("Upload failed: {0}")]
    Upload(String),
}

/// A write-only blob store that hands out public URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key`.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StorageError>;

    /// Public URL of the object stored under `key`.
    fn public_url(&self, key: &str) -> String;
}

/// Build the configured backend.
pub async fn from_config(storage: &StorageConfig, site: &SiteSettings) -> Arc<dyn ObjectStore> {
    match storage {
        StorageConfig::Local { dir } => {
            tracing::info!(dir = %dir.display(), "Using local object storage");
            Arc::new(LocalStore::new(
                dir.clone(),
                format!("{}{LOCAL_UPLOADS_PATH}", site.base_url),
            ))
        }
        StorageConfig::S3 {
            bucket,
            region,
            endpoint,
            public_url,
            credentials,
        } => {
            tracing::info!(%bucket, %region, endpoint = ?endpoint, "Using S3 object storage");
            Arc::new(
                S3Store::connect(
                    bucket.clone(),
                    region.clone(),
                    endpoint.clone(),
                    public_url.clone(),
                    credentials.clone(),
                )
                .await,
            )
        }
    }
}
