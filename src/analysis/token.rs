//! Token types for text analysis.
//!
//! A [`Token`] is a single unit of text produced by a tokenizer and
//! transformed by token filters. Tokens flow through the analysis pipeline
//! as a [`TokenStream`], a boxed iterator.
//!
//! # Examples
//!
//! ```
//! use feedback_classifier::analysis::token::Token;
//!
//! let token = Token::with_offsets("Library", 4, 20, 27);
//! let lowered = token.with_text("library");
//!
//! assert_eq!(lowered.text, "library");
//! assert_eq!(lowered.position, 4);
//! assert_eq!(lowered.start_offset, 20);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token produced by the analysis pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token text, possibly transformed by filters.
    pub text: String,

    /// Position of this token in the token sequence (0-based).
    pub position: usize,

    /// Byte offset of the token start in the original text.
    pub start_offset: usize,

    /// Byte offset of the token end in the original text.
    pub end_offset: usize,
}

impl Token {
    /// Create a new token without offset information.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with byte offsets into the original text.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Return a copy of this token with different text, keeping position and offsets.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens flowing through the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Conversion into a [`TokenStream`].
pub trait IntoTokenStream {
    /// Box this collection of tokens into a stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("wifi", 0);
        assert_eq!(token.text, "wifi");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.len(), 4);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_with_text_keeps_offsets() {
        let token = Token::with_offsets("Hostel", 2, 10, 16);
        let changed = token.with_text("hostel");

        assert_eq!(changed.text, "hostel");
        assert_eq!(changed.position, 2);
        assert_eq!(changed.start_offset, 10);
        assert_eq!(changed.end_offset, 16);
        assert_eq!(token.text, "Hostel");
    }

    #[test]
    fn test_into_token_stream() {
        let stream = vec![Token::new("a", 0), Token::new("b", 1)].into_token_stream();
        let texts: Vec<String> = stream.map(|t| t.to_string()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
