//! Pre-trained category model: a TF-IDF vectorizer and a multi-label
//! logistic regression classifier.
//!
//! Both are fitted elsewhere and loaded from JSON artifacts. Any problem with
//! an artifact surfaces as [`FeedbackError::ModelUnavailable`] at load time;
//! once loaded, the pair is immutable.
//!
//! # Architecture
//!
//! - `Vectorizer` trait: normalized text to feature vector
//! - `MultiLabelClassifier` trait: feature vector to one indicator per category
//! - `TfIdfVectorizer` / `LogisticRegressionClassifier`: the JSON-backed implementations
//! - `PredictorArtifacts`: the validated pair shared by all predictions

use std::path::Path;

use crate::error::FeedbackError;

mod artifacts;
mod logistic;
mod tfidf;
mod traits;

pub use artifacts::PredictorArtifacts;
pub use logistic::{LogisticRegressionArtifact, LogisticRegressionClassifier};
pub use tfidf::{Norm, TfIdfArtifact, TfIdfVectorizer};
pub use traits::{MultiLabelClassifier, Vectorizer};

/// Wrap a load failure as [`FeedbackError::ModelUnavailable`] naming the file.
pub(crate) fn unavailable_at(path: &Path, err: FeedbackError) -> FeedbackError {
    let reason = match err {
        FeedbackError::ModelUnavailable(reason) => reason,
        other => other.to_string(),
    };
    FeedbackError::model_unavailable(format!("{}: {reason}", path.display()))
}
