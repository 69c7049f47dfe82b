//! Classifier configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FeedbackError, Result};

/// Default file name of the fitted classifier artifact.
pub const DEFAULT_MODEL_PATH: &str = "LogReg_feedback_model.json";
/// Default file name of the fitted vectorizer artifact.
pub const DEFAULT_VECTORIZER_PATH: &str = "LogReg_vectorizer.json";

/// Configuration for loading and running the feedback classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Path to the classifier artifact (JSON).
    pub model_path: PathBuf,
    /// Path to the vectorizer artifact (JSON).
    pub vectorizer_path: PathBuf,
    /// Worker threads for batch classification (None = number of CPUs).
    pub threads: Option<usize>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            vectorizer_path: PathBuf::from(DEFAULT_VECTORIZER_PATH),
            threads: None,
        }
    }
}

impl ClassifierConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FeedbackError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: ClassifierConfig = serde_json::from_str(&content).map_err(|e| {
            FeedbackError::config(format!("invalid config {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values that can never work.
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(FeedbackError::config("threads must be at least 1"));
        }
        Ok(())
    }

    /// Number of worker threads to use for batch classification.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ClassifierConfig::default();
        assert_eq!(config.model_path, PathBuf::from("LogReg_feedback_model.json"));
        assert_eq!(config.vectorizer_path, PathBuf::from("LogReg_vectorizer.json"));
        assert!(config.threads.is_none());
        assert!(config.effective_threads() >= 1);
    }

    #[test]
    fn test_from_file_with_partial_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"model_path": "models/model.json", "threads": 2}}"#).unwrap();

        let config = ClassifierConfig::from_file(file.path()).unwrap();
        assert_eq!(config.model_path, PathBuf::from("models/model.json"));
        assert_eq!(config.vectorizer_path, PathBuf::from(DEFAULT_VECTORIZER_PATH));
        assert_eq!(config.effective_threads(), 2);
    }

    #[test]
    fn test_from_file_errors() {
        let err = ClassifierConfig::from_file("/nonexistent/config.json").unwrap_err();
        assert!(matches!(err, FeedbackError::Config(_)));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = ClassifierConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FeedbackError::Config(_)));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"threads": 0}}"#).unwrap();
        let err = ClassifierConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FeedbackError::Config(_)));
    }
}
