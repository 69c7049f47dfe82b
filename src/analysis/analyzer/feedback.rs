use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Analyzer for feedback text: alphabetic words, lowercased, Porter-stemmed.
pub struct FeedbackAnalyzer {
    inner: PipelineAnalyzer,
}

impl FeedbackAnalyzer {
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("feedback");

        Ok(Self { inner: analyzer })
    }
}

impl Default for FeedbackAnalyzer {
    fn default() -> Self {
        Self::new().expect("Feedback analyzer should be creatable with default settings")
    }
}

impl Analyzer for FeedbackAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "feedback"
    }
}

impl Debug for FeedbackAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
