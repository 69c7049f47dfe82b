//! Text normalization for the category model.
//!
//! Normalized text is the space-joined sequence of stemmed, lowercase,
//! alphabetic tokens of the input. It contains no punctuation, digits,
//! uppercase letters or repeated spaces.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, FeedbackAnalyzer};
use crate::error::Result;

/// Turns raw feedback into the normalized form the vectorizer was fitted on.
#[derive(Clone)]
pub struct TextNormalizer {
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TextNormalizer {
    /// Create a normalizer backed by [`FeedbackAnalyzer`].
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(FeedbackAnalyzer::new()?)))
    }

    /// Create a normalizer backed by a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        Self { analyzer }
    }

    /// Normalize `text`, e.g. `"The Quick-Fox!"` → `"the quick fox"`.
    ///
    /// Empty input, or input without any letters, yields an empty string.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let stems: Vec<String> = self
            .analyzer
            .analyze(text)?
            .map(|token| token.text)
            .filter(|stem| !stem.is_empty())
            .collect();

        Ok(stems.join(" "))
    }
}
