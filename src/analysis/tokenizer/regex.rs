//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::{FeedbackError, Result};

/// Pattern for feedback normalization: maximal runs of ASCII letters.
///
/// Letter runs touching digits, `_` or non-ASCII letters still count, so
/// `wifi2go` yields `wifi` and `go`. A `\b[a-zA-Z]+\b` pattern would drop
/// both.
pub const ALPHABETIC_PATTERN: &str = r"[A-Za-z]+";

/// Pattern for vectorizer features: words of two or more word characters.
pub const WORD_PATTERN: &str = r"(?u)\b\w\w+\b";

/// A tokenizer that extracts every non-overlapping match of a pattern as a token.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer that extracts alphabetic words.
    ///
    /// Digits, punctuation and any other non-letter characters act as
    /// boundaries, so `"wi-fi2go"` yields `wi`, `fi`, `go`.
    pub fn new() -> Result<Self> {
        Self::with_pattern(ALPHABETIC_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| FeedbackError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Alphabetic regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
