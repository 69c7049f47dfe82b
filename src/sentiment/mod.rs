//! Lexicon and rule based sentiment detection.
//!
//! A [`PolarityScorer`] (by default [`VaderScorer`]) turns raw text into a
//! compound score in `[-1, 1]`; [`SentimentDetector`] maps that score to a
//! [`Sentiment`], letting the negative keyword table tip neutral-scoring text
//! to Negative.
//!
//! # Example
//!
//! ```
//! use feedback_classifier::sentiment::{Sentiment, SentimentDetector};
//!
//! let detector = SentimentDetector::new();
//! assert_eq!(detector.detect("The gym is great"), Sentiment::Positive);
//! assert_eq!(detector.detect("The portal is slow"), Sentiment::Negative);
//! ```

mod detector;
mod scorer;
mod vader;

pub use detector::{
    NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, Sentiment, SentimentAssessment, SentimentDetector,
};
pub use scorer::{PolarityScorer, PolarityScores};
pub use vader::VaderScorer;
