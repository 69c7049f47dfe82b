//! Static improvement suggestions.

use crate::category::{Category, LabelSet};
use crate::sentiment::Sentiment;

pub const FACILITIES_SUGGESTION: &str = "🔧 Improve campus facilities and services.";
pub const ACADEMICS_SUGGESTION: &str = "📘 Provide better academic support or clarity.";
pub const ADMINISTRATION_SUGGESTION: &str =
    "🗂 Improve administrative responsiveness and processes.";
pub const NEUTRAL_SUGGESTION: &str = "🙂 Could use more engagement or support.";
pub const POSITIVE_SUGGESTION: &str = "🎉 Keep up the great work!";

/// Order in which negative feedback suggestions are listed.
const NEGATIVE_ORDER: [(Category, &str); 3] = [
    (Category::Facilities, FACILITIES_SUGGESTION),
    (Category::Academics, ACADEMICS_SUGGESTION),
    (Category::Administration, ADMINISTRATION_SUGGESTION),
];

/// Suggestions for a (labels, sentiment) pair.
///
/// - Negative: one suggestion per present category, Facilities first,
///   then Academics, then Administration.
/// - Neutral: the generic engagement suggestion, whatever the labels.
/// - Positive: encouragement, unless there are no labels.
pub fn suggest(labels: &LabelSet, sentiment: Sentiment) -> Vec<String> {
    match sentiment {
        Sentiment::Negative => NEGATIVE_ORDER
            .iter()
            .filter(|(category, _)| labels.contains(*category))
            .map(|(_, suggestion)| suggestion.to_string())
            .collect(),
        Sentiment::Neutral => vec![NEUTRAL_SUGGESTION.to_string()],
        Sentiment::Positive if labels.is_empty() => Vec::new(),
        Sentiment::Positive => vec![POSITIVE_SUGGESTION.to_string()],
    }
}
