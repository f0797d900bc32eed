//! Filesystem-backed object store.

use std::path::PathBuf;

use async_trait::async_trait;

use super::{ObjectStore, StorageError};

/// Writes objects below a root directory.
///
/// The directory is served statically at
/// [`LOCAL_UPLOADS_PATH`](super::LOCAL_UPLOADS_PATH), so `url_prefix` is
/// normally `{SITE_BASE_URL}/uploads`.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
    url_prefix: String,
}

impl LocalStore {
    pub fn new(root: PathBuf, url_prefix: impl Into<String>) -> Self {
        Self {
            root,
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for LocalStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StorageError> {
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &bytes).await?;
        tracing::debug!(
            path = %path.display(),
            size = bytes.len(),
            content_type,
            "Stored object on disk"
        );
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.url_prefix)
    }
}
