//! Error types for the feedback classifier.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is [`FeedbackError`]. Most errors can only surface while the process is
//! starting up (loading artifacts, reading configuration); classification of
//! a well-formed string does not fail with the built-in components.
//!
//! # Examples
//!
//! ```
//! use feedback_classifier::error::{FeedbackError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(FeedbackError::model_unavailable("model.json: file not found"))
//! }
//!
//! assert!(matches!(load(), Err(FeedbackError::ModelUnavailable(_))));
//! ```

use std::io;

use thiserror::Error;

/// The main error type for feedback classification.
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// I/O errors (reading artifacts, configuration, batch input)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// The pre-trained vectorizer or classifier could not be loaded.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Invalid caller input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FeedbackError.
pub type Result<T> = std::result::Result<T, FeedbackError>;

impl FeedbackError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FeedbackError::Analysis(msg.into())
    }

    /// Create a new model unavailable error.
    pub fn model_unavailable<S: Into<String>>(msg: S) -> Self {
        FeedbackError::ModelUnavailable(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FeedbackError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FeedbackError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FeedbackError::Other(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        FeedbackError::Other(format!("Internal error: {}", msg.into()))
    }

    /// Whether this error means the artifacts cannot be used.
    pub fn is_model_unavailable(&self) -> bool {
        matches!(self, FeedbackError::ModelUnavailable(_))
    }
}
