mod pipeline;
mod summarizer;

pub use pipeline::{PipelineError, SummaryPipeline};
pub use summarizer::Summarizer;
