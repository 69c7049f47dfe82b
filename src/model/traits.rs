//! Vectorizer and classifier trait definitions.

use crate::category::Category;
use crate::error::Result;

/// Turns normalized text into a fixed-length feature vector.
///
/// Implementations of this trait are loaded once at startup and shared
/// read-only across threads.
pub trait Vectorizer: Send + Sync {
    /// Vectorize `text`. The returned vector always has [`dimension`](Self::dimension) entries.
    fn transform(&self, text: &str) -> Result<Vec<f64>>;

    /// Length of the vectors produced by [`transform`](Self::transform).
    fn dimension(&self) -> usize;

    /// Get the name of this vectorizer for debugging and logging.
    fn name(&self) -> &str;
}

/// Predicts one binary indicator per category from a feature vector.
pub trait MultiLabelClassifier: Send + Sync {
    /// Predict the indicators for `features`, in [`Category::ALL`] order.
    ///
    /// # Arguments
    /// * `features` - A vector of exactly [`n_features`](Self::n_features) entries
    fn predict(&self, features: &[f64]) -> Result<Vec<bool>>;

    /// Number of features the classifier expects.
    fn n_features(&self) -> usize;

    /// The labels the indicators refer to.
    fn labels(&self) -> &[Category] {
        &Category::ALL
    }

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
