mod extraction;
mod outcome;
mod source_object;

pub use extraction::{Extraction, join_pages};
pub use outcome::{ProcessingOutcome, RunReport};
pub use source_object::{SUMMARY_CONTENT_TYPE, SourceObject};
