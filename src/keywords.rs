//! Static keyword tables and the rules built on them.
//!
//! Two tables drive the rule layer around the model:
//!
//! - [`NEGATIVE_KEYWORDS`]: phrases that push otherwise-neutral feedback to
//!   Negative. Matched as plain substrings of the lowercased text, so
//!   `"old"` also fires inside `"hold"`.
//! - [`CATEGORY_KEYWORDS`]: per-category keyword lists used to add
//!   categories the model missed. Matched as whole words, so `"room"` does
//!   not fire inside `"classroom"`.
//!
//! The two matching strategies are intentionally different; changing either
//! one changes classification results.

use lazy_static::lazy_static;
use regex::Regex;

use crate::category::{Category, LabelSet};

/// Phrases whose presence marks neutral-scoring feedback as Negative.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "outdated",
    "old",
    "broken",
    "slow",
    "expensive",
    "unsafe",
    "unreliable",
    "inadequate",
    "unavailable",
    "unhelpful",
    "long wait",
    "no response",
    "takes too long",
    "inefficient",
    "dirty",
    "poor",
    "difficult",
    "confusing",
    "crashes",
    "problem",
    "issue",
    "not working",
    "low quality",
    "needs improvement",
    "insufficient",
    "doesn't work",
    "unfair",
    "lack",
    "delayed",
    "missing",
    "late",
    "crowded",
    "limited",
    "overwhelmed",
    "stressful",
    "bad",
    "slow response",
];

/// Category keyword lists, in augmentation order.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Academics,
        &[
            "subject",
            "subjects",
            "math",
            "mathematics",
            "science",
            "concept",
            "curriculum",
            "teaching",
            "learning",
            "syllabus",
            "professor",
            "lecture",
            "exam",
            "assignment",
        ],
    ),
    (
        Category::Facilities,
        &[
            "library",
            "gym",
            "wifi",
            "bathroom",
            "elevator",
            "hostel",
            "ac",
            "equipment",
            "room",
            "building",
            "printer",
            "cleaning",
            "laundry",
            "sports",
        ],
    ),
    (
        Category::Administration,
        &[
            "registration",
            "admission",
            "fees",
            "complaint",
            "delay",
            "office",
            "admin",
            "dean",
            "finance",
            "portal",
        ],
    ),
];

lazy_static! {
    static ref CATEGORY_MATCHERS: Vec<(Category, Regex)> = CATEGORY_KEYWORDS
        .iter()
        .map(|(category, keywords)| (*category, whole_word_matcher(keywords)))
        .collect();
}

/// Build `\b(?:kw1|kw2|...)\b` over escaped keywords.
fn whole_word_matcher(keywords: &[&str]) -> Regex {
    let alternation = keywords
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b"))
        .expect("Escaped keyword alternation should be a valid regex")
}

/// The first negative keyword contained in `text`, if any (case-insensitive substring match).
pub fn find_negative_keyword(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    NEGATIVE_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lowered.contains(keyword))
}

/// Whether `text` contains any negative keyword.
pub fn contains_negative_keyword(text: &str) -> bool {
    find_negative_keyword(text).is_some()
}

/// Categories whose keywords occur in `text` as whole words, in table order,
/// each paired with the first keyword that matched.
pub fn matching_categories(text: &str) -> Vec<(Category, String)> {
    let lowered = text.to_lowercase();
    CATEGORY_MATCHERS
        .iter()
        .filter_map(|(category, matcher)| {
            matcher
                .find(&lowered)
                .map(|mat| (*category, mat.as_str().to_string()))
        })
        .collect()
}

/// Append every keyword-matched category missing from `labels`.
///
/// Existing labels are never removed or reordered. Returns the categories
/// that were added.
pub fn augment_labels(labels: &mut LabelSet, text: &str) -> Vec<Category> {
    let mut added = Vec::new();
    for (category, keyword) in matching_categories(text) {
        if labels.insert(category) {
            log::debug!("Keyword {keyword:?} added category {category}");
            added.push(category);
        }
    }
    added
}
