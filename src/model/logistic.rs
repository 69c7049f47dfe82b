//! One-vs-rest logistic regression loaded from a fitted artifact.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{FeedbackError, Result};

use super::traits::MultiLabelClassifier;
use super::unavailable_at;

fn default_labels() -> Vec<Category> {
    Category::ALL.to_vec()
}

fn default_threshold() -> f64 {
    0.5
}

/// On-disk form of a fitted multi-label logistic regression model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegressionArtifact {
    /// Label order of the rows below. Must be [`Category::ALL`].
    #[serde(default = "default_labels")]
    pub labels: Vec<Category>,
    /// One weight row per label.
    pub coefficients: Vec<Vec<f64>>,
    /// One bias per label.
    pub intercepts: Vec<f64>,
    /// Probability above which a label is predicted.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl LogisticRegressionArtifact {
    pub fn new(coefficients: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Self {
        LogisticRegressionArtifact {
            labels: default_labels(),
            coefficients,
            intercepts,
            threshold: default_threshold(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.labels != Category::ALL {
            return Err(FeedbackError::model_unavailable(format!(
                "labels {:?} do not match {:?}",
                self.labels,
                Category::ALL
            )));
        }

        let n_labels = Category::ALL.len();
        if self.coefficients.len() != n_labels || self.intercepts.len() != n_labels {
            return Err(FeedbackError::model_unavailable(format!(
                "expected {n_labels} coefficient rows and intercepts, found {} and {}",
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }

        let n_features = self.coefficients[0].len();
        if let Some(row) = self.coefficients.iter().position(|r| r.len() != n_features) {
            return Err(FeedbackError::model_unavailable(format!(
                "coefficient row {row} has {} features, expected {n_features}",
                self.coefficients[row].len()
            )));
        }

        let all_finite = self
            .coefficients
            .iter()
            .flatten()
            .chain(&self.intercepts)
            .all(|w| w.is_finite());
        if !all_finite {
            return Err(FeedbackError::model_unavailable(
                "coefficients and intercepts must be finite numbers",
            ));
        }

        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(FeedbackError::model_unavailable(format!(
                "threshold {} is outside (0, 1)",
                self.threshold
            )));
        }

        Ok(())
    }
}

/// Multi-label classifier made of one binary logistic model per category.
#[derive(Debug, Clone)]
pub struct LogisticRegressionClassifier {
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
    threshold: f64,
}

impl LogisticRegressionClassifier {
    /// Build a classifier from a fitted artifact.
    pub fn from_artifact(artifact: LogisticRegressionArtifact) -> Result<Self> {
        artifact.validate()?;
        Ok(LogisticRegressionClassifier {
            coefficients: artifact.coefficients,
            intercepts: artifact.intercepts,
            threshold: artifact.threshold,
        })
    }

    /// Load and validate a model artifact from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| unavailable_at(path, e.into()))?;
        let artifact: LogisticRegressionArtifact =
            serde_json::from_str(&content).map_err(|e| unavailable_at(path, e.into()))?;
        let classifier = Self::from_artifact(artifact).map_err(|e| unavailable_at(path, e))?;

        log::info!(
            "Loaded classifier from {} ({} features)",
            path.display(),
            classifier.n_features()
        );
        Ok(classifier)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Numerically stable logistic function.
    fn sigmoid(z: f64) -> f64 {
        if z >= 0.0 {
            1.0 / (1.0 + (-z).exp())
        } else {
            let exp_z = z.exp();
            exp_z / (1.0 + exp_z)
        }
    }

    fn probabilities(&self, features: &[f64]) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(weights, bias)| {
                let z: f64 = weights.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + bias;
                Self::sigmoid(z)
            })
            .collect()
    }
}

impl MultiLabelClassifier for LogisticRegressionClassifier {
    fn predict(&self, features: &[f64]) -> Result<Vec<bool>> {
        if features.len() != self.n_features() {
            return Err(FeedbackError::invalid_argument(format!(
                "expected {} features, got {}",
                self.n_features(),
                features.len()
            )));
        }

        let probabilities = self.probabilities(features);
        log::trace!("Label probabilities: {probabilities:?}");

        Ok(probabilities
            .into_iter()
            .map(|p| p > self.threshold)
            .collect())
    }

    fn n_features(&self) -> usize {
        self.coefficients[0].len()
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}
