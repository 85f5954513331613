use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::gcs_store::GcsBlobStore;
use super::local_store::LocalBlobStore;

pub struct BlobStoreFactory;

impl BlobStoreFactory {
    /// Builds a store bound to one bucket. Called twice at startup,
    /// once for the source bucket and once for the destination.
    pub fn create(
        settings: &StorageSettings,
        bucket: &str,
    ) -> Result<Arc<dyn BlobStore>, BlobStoreError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                let path = PathBuf::from(&settings.local_root).join(bucket);
                let store = LocalBlobStore::new(path)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Gcs => {
                let key_path = settings.gcs_service_account_key.as_deref().ok_or_else(|| {
                    BlobStoreError::Configuration("gcs_service_account_key required".into())
                })?;
                let store = GcsBlobStore::new(key_path, bucket)?;
                Ok(Arc::new(store))
            }
        }
    }
}
