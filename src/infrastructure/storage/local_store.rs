use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{BlobStore, BlobStoreError};

/// Filesystem-backed store for development and tests. A "bucket" is a
/// directory under the configured root.
pub struct LocalBlobStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalBlobStore {
    pub fn new(base_path: PathBuf) -> Result<Self, BlobStoreError> {
        std::fs::create_dir_all(&base_path).map_err(BlobStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl BlobStore for LocalBlobStore {
    async fn list(&self, prefix: &str) -> Result<Vec<String>, BlobStoreError> {
        let prefix_path = (!prefix.is_empty()).then(|| StorePath::from(prefix));
        let mut entries = self.inner.list(prefix_path.as_ref());

        let mut names = Vec::new();
        while let Some(meta) = entries.next().await {
            let meta = meta.map_err(|e| BlobStoreError::ListFailed(e.to_string()))?;
            names.push(meta.location.to_string());
        }

        Ok(names)
    }

    async fn fetch(&self, name: &str) -> Result<Vec<u8>, BlobStoreError> {
        let path = StorePath::from(name);
        let result = self
            .inner
            .get(&path)
            .await
            .map_err(|e| BlobStoreError::NotFound(e.to_string()))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn put(
        &self,
        name: &str,
        data: Bytes,
        _content_type: &str,
    ) -> Result<(), BlobStoreError> {
        // the filesystem carries no content-type metadata
        let path = StorePath::from(name);
        self.inner
            .put(&path, PutPayload::from(data))
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        Ok(())
    }
}
