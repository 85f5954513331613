mod gcs_store;
mod local_store;
mod mock_store;
mod store_factory;

pub use gcs_store::GcsBlobStore;
pub use local_store::LocalBlobStore;
pub use mock_store::MockBlobStore;
pub use store_factory::BlobStoreFactory;
