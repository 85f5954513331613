mod blob_store;
mod llm_client;
mod text_extractor;

pub use blob_store::{BlobStore, BlobStoreError};
pub use llm_client::{GenerationParams, LlmClient, LlmClientError};
pub use text_extractor::{TextExtractor, TextExtractorError};
