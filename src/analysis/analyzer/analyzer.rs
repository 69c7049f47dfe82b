//! Core analyzer trait definition.
//!
//! Analyzers combine a tokenizer with a chain of filters to turn raw text
//! into processed tokens:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! Two analyzers are used by the classifier: [`FeedbackAnalyzer`] produces
//! the stemmed form consumed by the model, and the vectorizer builds its own
//! [`PipelineAnalyzer`] from the token pattern stored in its artifact.
//!
//! [`FeedbackAnalyzer`]: super::feedback::FeedbackAnalyzer
//! [`PipelineAnalyzer`]: super::pipeline::PipelineAnalyzer

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Requires `Send + Sync` so analyzers can be shared by concurrent
/// classifications.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &'static str;
}
