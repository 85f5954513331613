use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::path::Path as StorePath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};

use crate::application::ports::{BlobStore, BlobStoreError};

/// Google Cloud Storage adapter, authenticated with a service-account
/// key file and bound to a single bucket.
pub struct GcsBlobStore {
    inner: Arc<dyn ObjectStore>,
}

impl GcsBlobStore {
    pub fn new(service_account_path: &str, bucket: &str) -> Result<Self, BlobStoreError> {
        let store = GoogleCloudStorageBuilder::new()
            .with_service_account_path(service_account_path)
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(store),
        })
    }
}

#[async_trait::async_trait]
impl BlobStore for GcsBlobStore {
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
        content_type: &str,
    ) -> Result<(), BlobStoreError> {
        let path = StorePath::from(name);

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());

        self.inner
            .put_opts(
                &path,
                PutPayload::from(data),
                PutOptions {
                    attributes,
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        Ok(())
    }
}
