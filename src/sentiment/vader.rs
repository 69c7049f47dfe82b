//! VADER polarity scoring.
//!
//! Backed by the `vader_sentiment` port, which carries the full VADER
//! lexicon (about 7,500 rated words, emoticons and slang) together with its
//! heuristics: capitalization, degree modifiers, negation, special idioms,
//! "but" and "least" handling and punctuation emphasis.

use vader_sentiment::SentimentIntensityAnalyzer;

use super::scorer::{PolarityScorer, PolarityScores};

/// [`PolarityScorer`] backed by VADER.
///
/// Scores are rounded like vaderSentiment's: the compound to four decimals,
/// the proportions to three.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    /// Create a new VADER scorer.
    pub fn new() -> Self {
        VaderScorer
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl PolarityScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        if text.trim().is_empty() {
            return PolarityScores::default();
        }

        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let score = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        PolarityScores {
            neg: round_to(score("neg"), 3),
            neu: round_to(score("neu"), 3),
            pos: round_to(score("pos"), 3),
            compound: round_to(score("compound"), 4),
        }
    }

    fn name(&self) -> &str {
        "vader"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        VaderScorer::new().polarity_scores(text).compound
    }

    fn assert_compound(text: &str, expected: f64) {
        let actual = compound(text);
        assert!(
            (actual - expected).abs() < 1e-4,
            "compound of {text:?}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_compounds() {
        // Reference values published with vaderSentiment.
        assert_compound("VADER is smart, handsome, and funny.", 0.8316);
        assert_compound("VADER is smart, handsome, and funny!", 0.8439);
        assert_compound("VADER is not smart, handsome, nor funny.", -0.7424);
        assert_compound("The book was good.", 0.4404);
    }

    #[test]
    fn test_feedback_vocabulary_is_rated() {
        for text in [
            "The hostel food is disgusting",
            "I am worried about the exams",
            "The admin staff is pathetic",
            "This delay is unacceptable",
        ] {
            assert!(compound(text) <= -0.05, "{text:?} should score negative");
        }
        assert!(compound("The professor is inspiring") >= 0.05);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(compound("The canteen is good") > 0.0);
        assert!(compound("The canteen is not good") < 0.0);
    }

    #[test]
    fn test_proportions_and_bounds() {
        let scores = VaderScorer::new().polarity_scores("The library is great");
        assert!(scores.pos > 0.0);
        assert_eq!(scores.neg, 0.0);
        assert!((scores.neg + scores.neu + scores.pos - 1.0).abs() < 0.002);

        let shouted = compound("TERRIBLE TERRIBLE TERRIBLE awful horrible rude!!!!");
        assert!((-1.0..=-0.9).contains(&shouted));
    }

    #[test]
    fn test_empty_and_unrated_text() {
        assert_eq!(
            VaderScorer::new().polarity_scores(""),
            PolarityScores::default()
        );
        assert_eq!(
            VaderScorer::new().polarity_scores("   \n"),
            PolarityScores::default()
        );
        assert_eq!(compound("The lecture is on Monday"), 0.0);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to(0.831_632, 4), 0.8316);
        assert_eq!(round_to(0.254_237, 3), 0.254);
        assert_eq!(round_to(-0.742_36, 4), -0.7424);
    }

    #[test]
    fn test_scorer_name() {
        assert_eq!(VaderScorer::new().name(), "vader");
    }
}
