//! # Feedback Classifier
//!
//! Multi-label category and sentiment classification for short free-text
//! feedback comments.
//!
//! ## Features
//!
//! - Porter-stemmed text normalization on a pluggable analysis pipeline
//! - TF-IDF + logistic regression category model loaded from JSON artifacts
//! - Keyword augmentation for categories the model misses
//! - Lexicon and rule based sentiment with a negative keyword override
//! - Static improvement suggestions per category and sentiment
//! - Parallel batch classification
//!
//! ## Example
//!
//! ```rust,no_run
//! use feedback_classifier::prelude::*;
//!
//! # fn main() -> feedback_classifier::error::Result<()> {
//! let classifier = FeedbackClassifier::from_config(&ClassifierConfig::default())?;
//! let result = classifier.classify("The wifi in the library is extremely slow")?;
//!
//! println!("{} / {}", result.categories, result.sentiment);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod category;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod keywords;
pub mod model;
pub mod normalizer;
pub mod predictor;
pub mod sentiment;
pub mod suggestion;

pub mod prelude {
    pub use crate::category::{Category, LabelSet};
    pub use crate::classifier::{Classification, FeedbackClassifier};
    pub use crate::config::ClassifierConfig;
    pub use crate::error::{FeedbackError, Result};
    pub use crate::model::PredictorArtifacts;
    pub use crate::normalizer::TextNormalizer;
    pub use crate::predictor::CategoryPredictor;
    pub use crate::sentiment::{Sentiment, SentimentDetector};
    pub use crate::suggestion::suggest;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
