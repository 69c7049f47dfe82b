//! Sentiment labels and the detector that assigns them.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::keywords;

use super::scorer::{PolarityScorer, PolarityScores};
use super::vader::VaderScorer;

/// Compound scores at or above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores at or below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Sentiment of a piece of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Decide the label from a compound score and the negative keyword rule.
    ///
    /// A positive score wins over a negative keyword; the keyword can only
    /// turn a neutral score into Negative.
    pub fn from_score(compound: f64, has_negative_keyword: bool) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if compound <= NEGATIVE_THRESHOLD || has_negative_keyword {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentiment label together with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentAssessment {
    pub sentiment: Sentiment,
    pub scores: PolarityScores,
    /// First negative keyword found in the text, if any.
    pub negative_keyword: Option<&'static str>,
}

/// Assigns a [`Sentiment`] to raw (unnormalized) feedback text.
#[derive(Clone)]
pub struct SentimentDetector {
    scorer: Arc<dyn PolarityScorer>,
}

impl fmt::Debug for SentimentDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentDetector")
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

impl Default for SentimentDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentDetector {
    /// Create a detector backed by [`VaderScorer`].
    pub fn new() -> Self {
        Self::with_scorer(Arc::new(VaderScorer::new()))
    }

    /// Create a detector backed by a custom scorer.
    pub fn with_scorer(scorer: Arc<dyn PolarityScorer>) -> Self {
        SentimentDetector { scorer }
    }

    /// Label `text` as Positive, Neutral or Negative.
    pub fn detect(&self, text: &str) -> Sentiment {
        self.assess(text).sentiment
    }

    /// Label `text` and return the scores and keyword that decided it.
    pub fn assess(&self, text: &str) -> SentimentAssessment {
        let scores = self.scorer.polarity_scores(text);
        let negative_keyword = keywords::find_negative_keyword(text);
        let sentiment = Sentiment::from_score(scores.compound, negative_keyword.is_some());

        log::debug!(
            "Sentiment {sentiment} (compound {:.4}, negative keyword {negative_keyword:?})",
            scores.compound
        );

        SentimentAssessment {
            sentiment,
            scores,
            negative_keyword,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns the same compound score for every text.
    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn polarity_scores(&self, _text: &str) -> PolarityScores {
            PolarityScores {
                compound: self.0,
                ..PolarityScores::default()
            }
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn fixed(compound: f64) -> SentimentDetector {
        SentimentDetector::with_scorer(Arc::new(FixedScorer(compound)))
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(Sentiment::from_score(0.05, false), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.0499, false), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.0499, false), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-0.05, false), Sentiment::Negative);
    }

    #[test]
    fn test_positive_score_beats_negative_keyword() {
        assert_eq!(
            fixed(0.10).detect("The projector is broken"),
            Sentiment::Positive
        );
        assert_eq!(Sentiment::from_score(0.05, true), Sentiment::Positive);
    }

    #[test]
    fn test_negative_keyword_overrides_neutral_score() {
        let assessment = fixed(0.0).assess("We got a slow response from the office");
        assert_eq!(assessment.sentiment, Sentiment::Negative);
        assert_eq!(assessment.negative_keyword, Some("slow"));

        assert_eq!(fixed(0.0).detect("The lecture is on Monday"), Sentiment::Neutral);
        assert_eq!(fixed(-0.2).detect("The lecture is on Monday"), Sentiment::Negative);
    }

    #[test]
    fn test_default_scorer() {
        let detector = SentimentDetector::new();
        assert_eq!(
            detector.detect("The library is great, even the old printer"),
            Sentiment::Positive
        );
        assert_eq!(detector.detect("The lecture is on Monday"), Sentiment::Neutral);
        assert_eq!(
            detector.detect("We got a slow response from the office"),
            Sentiment::Negative
        );
        assert_eq!(detector.detect("The staff is rude"), Sentiment::Negative);
        assert_eq!(detector.detect(""), Sentiment::Neutral);

        for text in [
            "The hostel food is disgusting",
            "I am worried about the exams",
            "The admin staff is pathetic",
            "This delay is unacceptable",
        ] {
            assert_eq!(detector.detect(text), Sentiment::Negative, "{text:?}");
        }
        assert_eq!(
            detector.detect("The professor is inspiring"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(Sentiment::Negative.to_string(), "Negative");
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            r#""Positive""#
        );
        assert_eq!(
            format!("{:?}", SentimentDetector::new()),
            r#"SentimentDetector { scorer: "vader" }"#
        );
    }
}
