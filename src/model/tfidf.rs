//! TF-IDF vectorizer loaded from a fitted artifact.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::LowercaseFilter;
use crate::analysis::tokenizer::{RegexTokenizer, regex::WORD_PATTERN};
use crate::error::{FeedbackError, Result};

use super::traits::Vectorizer;
use super::unavailable_at;

/// Vector normalization applied after IDF weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Scale to unit Euclidean length.
    #[default]
    L2,
    /// Leave the weighted counts as they are.
    None,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_token_pattern() -> String {
    WORD_PATTERN.to_string()
}

fn default_lowercase() -> bool {
    true
}

/// On-disk form of a fitted TF-IDF vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfArtifact {
    /// Term (or space-joined n-gram) to feature index.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index.
    pub idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: Norm,
}

impl TfIdfArtifact {
    /// Artifact with default settings over the given vocabulary and weights.
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Self {
        TfIdfArtifact {
            vocabulary,
            idf,
            ngram_range: default_ngram_range(),
            token_pattern: default_token_pattern(),
            lowercase: default_lowercase(),
            sublinear_tf: false,
            norm: Norm::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.vocabulary.is_empty() {
            return Err(FeedbackError::model_unavailable("vocabulary is empty"));
        }
        if self.idf.len() != self.vocabulary.len() {
            return Err(FeedbackError::model_unavailable(format!(
                "idf has {} entries but the vocabulary has {} terms",
                self.idf.len(),
                self.vocabulary.len()
            )));
        }

        let mut seen = vec![false; self.idf.len()];
        for (term, &index) in &self.vocabulary {
            match seen.get_mut(index) {
                None => {
                    return Err(FeedbackError::model_unavailable(format!(
                        "vocabulary index {index} of {term:?} is out of range"
                    )));
                }
                Some(true) => {
                    return Err(FeedbackError::model_unavailable(format!(
                        "vocabulary index {index} of {term:?} is used more than once"
                    )));
                }
                Some(slot) => *slot = true,
            }
        }

        if let Some(index) = self.idf.iter().position(|w| !w.is_finite()) {
            return Err(FeedbackError::model_unavailable(format!(
                "idf[{index}] is not a finite number"
            )));
        }

        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(FeedbackError::model_unavailable(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }

        Ok(())
    }
}

/// TF-IDF vectorizer for text feature extraction.
///
/// Mirrors the transform of a fitted scikit-learn style vectorizer: regex
/// tokens, word n-grams, raw or sublinear term counts, IDF weights and an
/// optional L2 normalization.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    norm: Norm,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("ngram_range", &self.ngram_range)
            .field("sublinear_tf", &self.sublinear_tf)
            .field("norm", &self.norm)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Build a vectorizer from a fitted artifact.
    ///
    /// Fails with [`FeedbackError::ModelUnavailable`] if the artifact is
    /// inconsistent.
    pub fn from_artifact(artifact: TfIdfArtifact) -> Result<Self> {
        artifact.validate()?;

        let tokenizer = RegexTokenizer::with_pattern(&artifact.token_pattern).map_err(|e| {
            FeedbackError::model_unavailable(format!(
                "invalid token_pattern {:?}: {e}",
                artifact.token_pattern
            ))
        })?;
        let mut analyzer = PipelineAnalyzer::new(Arc::new(tokenizer));
        if artifact.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }

        Ok(TfIdfVectorizer {
            vocabulary: artifact.vocabulary.into_iter().collect(),
            idf: artifact.idf,
            ngram_range: artifact.ngram_range,
            sublinear_tf: artifact.sublinear_tf,
            norm: artifact.norm,
            analyzer: Arc::new(analyzer.with_name("tfidf")),
        })
    }

    /// Load and validate a vectorizer artifact from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| unavailable_at(path, e.into()))?;
        let artifact: TfIdfArtifact =
            serde_json::from_str(&content).map_err(|e| unavailable_at(path, e.into()))?;
        let vectorizer = Self::from_artifact(artifact).map_err(|e| unavailable_at(path, e))?;

        log::info!(
            "Loaded vectorizer from {} ({} terms)",
            path.display(),
            vectorizer.vocabulary_size()
        );
        Ok(vectorizer)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn ngram_range(&self) -> (usize, usize) {
        self.ngram_range
    }

    /// Tokenize a document and expand it into the configured word n-grams.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        let (min_n, max_n) = self.ngram_range;

        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            if n == 1 {
                terms.extend(tokens.iter().cloned());
            } else {
                terms.extend(tokens.windows(n).map(|window| window.join(" ")));
            }
        }
        Ok(terms)
    }
}

impl Vectorizer for TfIdfVectorizer {
    fn transform(&self, text: &str) -> Result<Vec<f64>> {
        let mut tf = vec![0.0f64; self.idf.len()];

        // Count term frequencies
        for term in self.terms(text)? {
            if let Some(&idx) = self.vocabulary.get(&term) {
                tf[idx] += 1.0;
            }
        }

        // Apply IDF
        for (idx, count) in tf.iter_mut().enumerate() {
            if *count > 0.0 {
                if self.sublinear_tf {
                    *count = 1.0 + count.ln();
                }
                *count *= self.idf[idx];
            }
        }

        if self.norm == Norm::L2 {
            let magnitude = tf.iter().map(|x| x * x).sum::<f64>().sqrt();
            if magnitude > 0.0 {
                for weight in &mut tf {
                    *weight /= magnitude;
                }
            }
        }

        Ok(tf)
    }

    fn dimension(&self) -> usize {
        self.idf.len()
    }

    fn name(&self) -> &str {
        "tfidf"
    }
}
