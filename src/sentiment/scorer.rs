//! Polarity scorer trait definition.

use serde::{Deserialize, Serialize};

/// Polarity breakdown of a text.
///
/// `neg`, `neu` and `pos` are the proportions of negative, neutral and
/// positive signal and sum to roughly 1 (all three are 0 for empty text).
/// `compound` is the normalized overall score in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Scores the polarity of raw text.
///
/// Implementations must be deterministic and must not fail; text without any
/// scored words yields a compound of 0.
pub trait PolarityScorer: Send + Sync {
    /// Compute the polarity scores of `text`.
    fn polarity_scores(&self, text: &str) -> PolarityScores;

    /// Get the name of this scorer for debugging and logging.
    fn name(&self) -> &str;
}
