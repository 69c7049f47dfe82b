//! Feedback categories and ordered label sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FeedbackError;

/// One of the three fixed feedback categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Teaching, curriculum, exams and other coursework concerns.
    Academics,
    /// Buildings, equipment, network and campus services.
    Facilities,
    /// Registration, fees, offices and administrative processes.
    Administration,
}

impl Category {
    /// All categories in label-index order, the order the classifier emits
    /// its indicators in.
    pub const ALL: [Category; 3] = [
        Category::Academics,
        Category::Facilities,
        Category::Administration,
    ];

    /// Position of this category in the classifier output.
    pub fn index(self) -> usize {
        match self {
            Category::Academics => 0,
            Category::Facilities => 1,
            Category::Administration => 2,
        }
    }

    /// The category name as shown to users.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Academics => "Academics",
            Category::Facilities => "Facilities",
            Category::Administration => "Administration",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| FeedbackError::invalid_argument(format!("Unknown category: {s}")))
    }
}

/// An insertion-ordered set of categories without duplicates.
///
/// Model-predicted labels are inserted first (in label-index order), and
/// keyword-augmented labels are appended after them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet {
    labels: Vec<Category>,
}

impl LabelSet {
    /// Create an empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a label set from per-category indicators in [`Category::ALL`] order.
    pub fn from_indicators(indicators: &[bool]) -> Self {
        let mut labels = Self::new();
        for (category, &on) in Category::ALL.iter().zip(indicators) {
            if on {
                labels.insert(*category);
            }
        }
        labels
    }

    /// Append `category` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, category: Category) -> bool {
        if self.contains(category) {
            return false;
        }
        self.labels.push(category);
        true
    }

    pub fn contains(&self, category: Category) -> bool {
        self.labels.contains(&category)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over the labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.labels.iter().copied()
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.labels
    }

    /// Whether every label of `other` is also in `self`.
    pub fn is_superset_of(&self, other: &LabelSet) -> bool {
        other.iter().all(|category| self.contains(category))
    }
}

impl FromIterator<Category> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut labels = LabelSet::new();
        for category in iter {
            labels.insert(category);
        }
        labels
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Category::as_str).collect();
        f.write_str(&names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_and_names() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(category.as_str().parse::<Category>().unwrap(), *category);
        }
        assert!("academics".parse::<Category>().is_err());
    }

    #[test]
    fn test_from_indicators() {
        let labels = LabelSet::from_indicators(&[true, false, true]);
        assert_eq!(
            labels.as_slice(),
            &[Category::Academics, Category::Administration]
        );
        assert!(LabelSet::from_indicators(&[false, false, false]).is_empty());
    }

    #[test]
    fn test_insert_keeps_order_without_duplicates() {
        let mut labels = LabelSet::new();
        assert!(labels.insert(Category::Administration));
        assert!(labels.insert(Category::Academics));
        assert!(!labels.insert(Category::Administration));

        assert_eq!(labels.len(), 2);
        assert_eq!(
            labels.as_slice(),
            &[Category::Administration, Category::Academics]
        );
        assert_eq!(labels.to_string(), "Administration, Academics");
    }

    #[test]
    fn test_superset() {
        let small: LabelSet = [Category::Facilities].into_iter().collect();
        let big: LabelSet = [Category::Facilities, Category::Academics]
            .into_iter()
            .collect();
        assert!(big.is_superset_of(&small));
        assert!(!small.is_superset_of(&big));
        assert!(small.is_superset_of(&LabelSet::new()));
    }

    #[test]
    fn test_serializes_as_names() {
        let labels: LabelSet = [Category::Facilities, Category::Administration]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"["Facilities","Administration"]"#);

        let back: LabelSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, labels);
    }
}
