//! The single entry point: text in, categories, sentiment and suggestions out.

use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;

use crate::category::LabelSet;
use crate::config::ClassifierConfig;
use crate::error::{FeedbackError, Result};
use crate::model::PredictorArtifacts;
use crate::predictor::CategoryPredictor;
use crate::sentiment::{Sentiment, SentimentDetector};
use crate::suggestion;

/// Outcome of classifying one piece of feedback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Model labels first, keyword-augmented labels after them.
    pub categories: LabelSet,
    pub sentiment: Sentiment,
    pub suggestions: Vec<String>,
}

/// Classifies feedback comments.
///
/// Holds only immutable, shared state, so one instance can serve any number
/// of threads without locking.
#[derive(Debug, Clone)]
pub struct FeedbackClassifier {
    predictor: Arc<CategoryPredictor>,
    detector: Arc<SentimentDetector>,
}

impl FeedbackClassifier {
    /// Create a classifier over loaded artifacts with the default sentiment detector.
    pub fn new(artifacts: PredictorArtifacts) -> Result<Self> {
        Ok(Self::with_components(
            CategoryPredictor::new(artifacts)?,
            SentimentDetector::new(),
        ))
    }

    /// Load the artifacts named by `config` and create a classifier over them.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        Self::new(PredictorArtifacts::from_config(config)?)
    }

    pub fn with_components(predictor: CategoryPredictor, detector: SentimentDetector) -> Self {
        FeedbackClassifier {
            predictor: Arc::new(predictor),
            detector: Arc::new(detector),
        }
    }

    /// Classify one comment.
    ///
    /// Categories come from the normalized text; sentiment is computed from
    /// the raw text independently of them.
    pub fn classify(&self, text: &str) -> Result<Classification> {
        let categories = self.predictor.predict(text)?;
        let sentiment = self.detector.detect(text);
        let suggestions = suggestion::suggest(&categories, sentiment);

        log::debug!(
            "Classified as [{categories}] / {sentiment} with {} suggestion(s)",
            suggestions.len()
        );

        Ok(Classification {
            categories,
            sentiment,
            suggestions,
        })
    }

    /// Classify many comments in parallel on the current rayon pool.
    ///
    /// Results are returned in input order and equal what [`classify`](Self::classify)
    /// returns for each text.
    pub fn classify_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<Classification>> {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }

    pub fn predictor(&self) -> &CategoryPredictor {
        &self.predictor
    }

    pub fn detector(&self) -> &SentimentDetector {
        &self.detector
    }
}

/// Build the worker pool used for batch classification.
pub fn build_thread_pool(config: &ClassifierConfig) -> Result<ThreadPool> {
    let threads = config.effective_threads();
    log::debug!("Starting batch pool with {threads} thread(s)");

    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("feedback-classify-{i}"))
        .build()
        .map_err(|e| FeedbackError::internal(format!("Failed to create thread pool: {e}")))
}
