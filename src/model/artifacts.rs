//! The loaded vectorizer/classifier pair.

use std::path::Path;
use std::sync::Arc;

use crate::config::ClassifierConfig;
use crate::error::{FeedbackError, Result};

use super::logistic::LogisticRegressionClassifier;
use super::tfidf::TfIdfVectorizer;
use super::traits::{MultiLabelClassifier, Vectorizer};

/// A vectorizer and a classifier that agree on the feature dimension.
///
/// Loaded once at startup and shared read-only afterwards; cloning only
/// bumps reference counts.
#[derive(Clone)]
pub struct PredictorArtifacts {
    vectorizer: Arc<dyn Vectorizer>,
    classifier: Arc<dyn MultiLabelClassifier>,
}

impl std::fmt::Debug for PredictorArtifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictorArtifacts")
            .field("vectorizer", &self.vectorizer.name())
            .field("classifier", &self.classifier.name())
            .field("dimension", &self.vectorizer.dimension())
            .finish()
    }
}

impl PredictorArtifacts {
    /// Pair a vectorizer with a classifier.
    ///
    /// Fails with [`FeedbackError::ModelUnavailable`] if the classifier does
    /// not expect the vectorizer's dimension.
    pub fn new(
        vectorizer: Arc<dyn Vectorizer>,
        classifier: Arc<dyn MultiLabelClassifier>,
    ) -> Result<Self> {
        if vectorizer.dimension() != classifier.n_features() {
            return Err(FeedbackError::model_unavailable(format!(
                "{} produces {} features but {} expects {}",
                vectorizer.name(),
                vectorizer.dimension(),
                classifier.name(),
                classifier.n_features()
            )));
        }
        Ok(PredictorArtifacts {
            vectorizer,
            classifier,
        })
    }

    /// Load both JSON artifacts from disk.
    pub fn load<V: AsRef<Path>, M: AsRef<Path>>(vectorizer_path: V, model_path: M) -> Result<Self> {
        let vectorizer = TfIdfVectorizer::load(vectorizer_path)?;
        let classifier = LogisticRegressionClassifier::load(model_path)?;
        Self::new(Arc::new(vectorizer), Arc::new(classifier))
    }

    /// Load the artifacts named by `config`.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        Self::load(&config.vectorizer_path, &config.model_path)
    }

    pub fn vectorizer(&self) -> &Arc<dyn Vectorizer> {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &Arc<dyn MultiLabelClassifier> {
        &self.classifier
    }
}
