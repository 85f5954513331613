use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Names of all objects under the given prefix.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, BlobStoreError>;

    async fn fetch(&self, name: &str) -> Result<Vec<u8>, BlobStoreError>;

    /// Writes an object, overwriting any existing object at that name.
    /// The content type is declared at upload time, not validated
    /// against the data.
    async fn put(
        &self,
        name: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("store configuration: {0}")]
    Configuration(String),
    #[error("list failed: {0}")]
    ListFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
