use std::sync::Arc;

use crate::application::ports::{GenerationParams, LlmClient, LlmClientError};
use crate::domain::Extraction;

const TEMPERATURE: f32 = 0.2;
const MAX_OUTPUT_TOKENS: u32 = 512;

/// Extracted text beyond this many characters is cut before the
/// prompt is assembled. Keeps a single request comfortably inside the
/// model's context window; the original length is logged.
const MAX_INPUT_CHARS: usize = 400_000;

/// Formats an extraction into the fixed summary prompt and runs one
/// generation request with fixed decoding parameters.
pub struct Summarizer {
    llm_client: Arc<dyn LlmClient>,
}

impl Summarizer {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    /// Returns the raw model output, unparsed and unvalidated. The
    /// requested structure (topic, length line, bullets, takeaways)
    /// is asked for in the prompt, never enforced.
    pub async fn summarize(&self, extraction: &Extraction) -> Result<String, LlmClientError> {
        let text = truncate_on_char_boundary(&extraction.text, MAX_INPUT_CHARS);
        if text.len() < extraction.text.len() {
            tracing::warn!(
                original_chars = extraction.text.chars().count(),
                max_chars = MAX_INPUT_CHARS,
                "Extracted text exceeds input budget, truncating"
            );
        }

        let prompt = build_prompt(text, extraction.page_count);
        let params = GenerationParams {
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        };

        self.llm_client.generate(&prompt, &params).await
    }
}

fn build_prompt(text: &str, page_count: usize) -> String {
    format!(
        r#"You are an expert document summarizer.

Summarize the document below using exactly this structure:

**Topic / Subject** - one sentence
**Length** - "{page_count} pages, approx {{word_count}} words"
**Important Points** - 3-8 short bullets
**Key Take-aways** - 1-3 lines on why the document matters

--- BEGIN DOCUMENT ---
{text}
--- END DOCUMENT ---
"#
    )
}

fn truncate_on_char_boundary(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
