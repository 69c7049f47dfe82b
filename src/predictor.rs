//! Category prediction: model output plus keyword augmentation.

use std::sync::Arc;

use crate::category::LabelSet;
use crate::error::Result;
use crate::keywords;
use crate::model::PredictorArtifacts;
use crate::normalizer::TextNormalizer;

/// Predicts the categories of a feedback comment.
///
/// The text is normalized, vectorized and classified; categories whose
/// keywords occur in the raw text are then appended if the model missed
/// them.
#[derive(Debug, Clone)]
pub struct CategoryPredictor {
    normalizer: Arc<TextNormalizer>,
    artifacts: PredictorArtifacts,
}

impl CategoryPredictor {
    /// Create a predictor with the default normalizer.
    pub fn new(artifacts: PredictorArtifacts) -> Result<Self> {
        Ok(Self::with_normalizer(
            artifacts,
            Arc::new(TextNormalizer::new()?),
        ))
    }

    /// Create a predictor with a custom normalizer.
    pub fn with_normalizer(artifacts: PredictorArtifacts, normalizer: Arc<TextNormalizer>) -> Self {
        CategoryPredictor {
            normalizer,
            artifacts,
        }
    }

    /// Predict the final label set of `text`.
    pub fn predict(&self, text: &str) -> Result<LabelSet> {
        let mut labels = self.model_labels(text)?;
        let added = keywords::augment_labels(&mut labels, text);
        if !added.is_empty() {
            log::debug!("Keyword augmentation added {added:?}");
        }
        Ok(labels)
    }

    /// The model's own labels for `text`, without keyword augmentation.
    pub fn model_labels(&self, text: &str) -> Result<LabelSet> {
        let normalized = self.normalizer.normalize(text)?;
        let features = self.artifacts.vectorizer().transform(&normalized)?;
        let indicators = self.artifacts.classifier().predict(&features)?;
        let labels = LabelSet::from_indicators(&indicators);

        log::debug!("Normalized {normalized:?} -> model labels [{labels}]");
        Ok(labels)
    }

    pub fn artifacts(&self) -> &PredictorArtifacts {
        &self.artifacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::model::{MultiLabelClassifier, Vectorizer};

    /// Vectorizer emitting a single constant feature.
    struct ConstantVectorizer;

    impl Vectorizer for ConstantVectorizer {
        fn transform(&self, _text: &str) -> Result<Vec<f64>> {
            Ok(vec![1.0])
        }

        fn dimension(&self) -> usize {
            1
        }

        fn name(&self) -> &str {
            "constant"
        }
    }

    /// Classifier always predicting the same indicators.
    struct FixedClassifier(Vec<bool>);

    impl MultiLabelClassifier for FixedClassifier {
        fn predict(&self, _features: &[f64]) -> Result<Vec<bool>> {
            Ok(self.0.clone())
        }

        fn n_features(&self) -> usize {
            1
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn predictor(indicators: [bool; 3]) -> CategoryPredictor {
        let artifacts = PredictorArtifacts::new(
            Arc::new(ConstantVectorizer),
            Arc::new(FixedClassifier(indicators.to_vec())),
        )
        .unwrap();
        CategoryPredictor::new(artifacts).unwrap()
    }

    #[test]
    fn test_model_labels_in_category_order() {
        let labels = predictor([true, false, true])
            .model_labels("anything")
            .unwrap();
        assert_eq!(
            labels.as_slice(),
            &[Category::Academics, Category::Administration]
        );
    }

    #[test]
    fn test_augmentation_appends_after_model_labels() {
        let predictor = predictor([false, false, true]);
        let labels = predictor
            .predict("The library wifi keeps dropping during the exam")
            .unwrap();
        assert_eq!(
            labels.as_slice(),
            &[
                Category::Administration,
                Category::Academics,
                Category::Facilities
            ]
        );
    }

    #[test]
    fn test_augmentation_is_monotonic() {
        let predictor = predictor([true, true, false]);
        for text in ["", "the gym", "nothing to see", "dean office portal"] {
            let raw = predictor.model_labels(text).unwrap();
            let augmented = predictor.predict(text).unwrap();
            assert!(augmented.is_superset_of(&raw), "{text:?}");
            assert_eq!(&augmented.as_slice()[..raw.len()], raw.as_slice());
        }
    }

    #[test]
    fn test_empty_text_has_defined_prediction() {
        assert!(predictor([false, false, false]).predict("").unwrap().is_empty());
        assert!(
            predictor([false, false, false])
                .predict("The classroom is fine")
                .unwrap()
                .is_empty()
        );
    }
}
