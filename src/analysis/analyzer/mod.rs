//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod feedback;
mod pipeline;

pub use analyzer::Analyzer;
pub use feedback::FeedbackAnalyzer;
pub use pipeline::PipelineAnalyzer;
