//! Text analysis: tokenization, token filters and analysis pipelines.
//!
//! The building blocks here are shared by the text normalizer (alphabetic
//! words, lowercased and stemmed) and by the TF-IDF vectorizer (which
//! tokenizes with the pattern stored in its artifact).

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
