mod lopdf_extractor;

pub use lopdf_extractor::LopdfExtractor;
