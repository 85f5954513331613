use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use bytes::Bytes;

use crate::application::ports::{BlobStore, BlobStoreError};

/// In-memory store for tests. Objects live in a map; individual
/// fetches can be poisoned to exercise per-object failure handling.
#[derive(Default)]
pub struct MockBlobStore {
    objects: Mutex<HashMap<String, StoredObject>>,
    poisoned: Mutex<HashSet<String>>,
}

struct StoredObject {
    data: Vec<u8>,
    content_type: String,
}

impl MockBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, name: &str, data: &[u8]) {
        self.objects.lock().unwrap().insert(
            name.to_string(),
            StoredObject {
                data: data.to_vec(),
                content_type: String::new(),
            },
        );
    }

    /// Makes every subsequent fetch of `name` fail.
    pub fn poison_fetch(&self, name: &str) {
        self.poisoned.lock().unwrap().insert(name.to_string());
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(name).map(|o| o.data.clone())
    }

    pub fn content_type_of(&self, name: &str) -> Option<String> {
        self.objects
            .lock()
            .unwrap()
            .get(name)
            .map(|o| o.content_type.clone())
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl BlobStore for MockBlobStore {
    async fn list(&self, prefix: &str) -> Result<Vec<String>, BlobStoreError> {
        let mut names: Vec<String> = self
            .objects
            .lock()
            .unwrap()
            .keys()
            .filter(|n| n.starts_with(prefix))
            .cloned()
            .collect();
        names.sort();
        Ok(names)
    }

    async fn fetch(&self, name: &str) -> Result<Vec<u8>, BlobStoreError> {
        if self.poisoned.lock().unwrap().contains(name) {
            return Err(BlobStoreError::DownloadFailed(format!(
                "poisoned object: {name}"
            )));
        }
        self.objects
            .lock()
            .unwrap()
            .get(name)
            .map(|o| o.data.clone())
            .ok_or_else(|| BlobStoreError::NotFound(name.to_string()))
    }

    async fn put(
        &self,
        name: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), BlobStoreError> {
        self.objects.lock().unwrap().insert(
            name.to_string(),
            StoredObject {
                data: data.to_vec(),
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }
}
