use crate::application::ports::{GenerationParams, LlmClient, LlmClientError};

pub struct MockLlmClient;

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, LlmClientError> {
        Ok("Mock summary".to_string())
    }
}
