//! Output formatting for CLI commands.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::category::Category;
use crate::classifier::Classification;
use crate::cli::args::{FeedbackArgs, OutputFormat};
use crate::error::Result;
use crate::sentiment::SentimentAssessment;

/// Warning shown when no category applies.
pub const UNCLASSIFIED_WARNING: &str =
    "⚠️ Could not classify the feedback. Try rephrasing or improve training data.";

/// Results that know how to print themselves for humans.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// One classified line of a batch input file.
#[derive(Debug, Serialize)]
pub struct BatchItem {
    /// 1-based line number in the input file.
    pub line: usize,
    pub text: String,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Description of the loaded artifacts.
#[derive(Debug, Serialize)]
pub struct ArtifactSummary {
    pub model_path: PathBuf,
    pub vectorizer_path: PathBuf,
    pub vocabulary_size: usize,
    pub dimension: usize,
    pub labels: Vec<Category>,
    pub ngram_range: (usize, usize),
}

impl HumanOutput for Classification {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.categories.is_empty() {
            writeln!(out, "{UNCLASSIFIED_WARNING}")?;
        } else {
            writeln!(out, "Predicted Categories: {}", self.categories)?;
        }

        writeln!(out, "Sentiment: {}", self.sentiment)?;

        if !self.suggestions.is_empty() && !self.categories.is_empty() {
            writeln!(out, "Suggested Improvements:")?;
            for suggestion in &self.suggestions {
                writeln!(out, "  - {suggestion}")?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for BatchItem {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "[line {}] {}", self.line, self.text)?;
        self.classification.write_human(out)
    }
}

impl HumanOutput for SentimentAssessment {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Sentiment: {}", self.sentiment)?;
        writeln!(
            out,
            "Scores: compound {:.4}, positive {:.3}, neutral {:.3}, negative {:.3}",
            self.scores.compound, self.scores.pos, self.scores.neu, self.scores.neg
        )?;
        if let Some(keyword) = self.negative_keyword {
            writeln!(out, "Negative keyword: {keyword:?}")?;
        }
        Ok(())
    }
}

impl HumanOutput for ArtifactSummary {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        let labels: Vec<&str> = self.labels.iter().map(|label| label.as_str()).collect();

        writeln!(out, "Model:           {}", self.model_path.display())?;
        writeln!(out, "Vectorizer:      {}", self.vectorizer_path.display())?;
        writeln!(out, "Vocabulary size: {}", self.vocabulary_size)?;
        writeln!(out, "Dimension:       {}", self.dimension)?;
        writeln!(out, "Labels:          {}", labels.join(", "))?;
        writeln!(
            out,
            "N-gram range:    ({}, {})",
            self.ngram_range.0, self.ngram_range.1
        )
    }
}

/// Print a single result in the selected format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &FeedbackArgs,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(&mut out)?;
        }
        OutputFormat::Json => writeln!(out, "{}", to_json(result, args.pretty)?)?,
    }
    Ok(())
}

/// Print many results, one per line in JSON mode and one block each in human mode.
pub fn output_results<T: Serialize + HumanOutput>(
    message: &str,
    results: &[T],
    args: &FeedbackArgs,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                result.write_human(&mut out)?;
            }
        }
        OutputFormat::Json => {
            for result in results {
                writeln!(out, "{}", to_json(result, false)?)?;
            }
        }
    }
    Ok(())
}

fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::LabelSet;
    use crate::sentiment::{PolarityScores, Sentiment};
    use crate::suggestion::FACILITIES_SUGGESTION;

    fn render<T: HumanOutput>(result: &T) -> String {
        let mut buffer = Vec::new();
        result.write_human(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_classification_with_suggestions() {
        let classification = Classification {
            categories: [Category::Facilities].into_iter().collect(),
            sentiment: Sentiment::Negative,
            suggestions: vec![FACILITIES_SUGGESTION.to_string()],
        };

        assert_eq!(
            render(&classification),
            "Predicted Categories: Facilities\n\
             Sentiment: Negative\n\
             Suggested Improvements:\n  - 🔧 Improve campus facilities and services.\n"
        );
    }

    #[test]
    fn test_unclassified_hides_suggestions() {
        let classification = Classification {
            categories: LabelSet::new(),
            sentiment: Sentiment::Neutral,
            suggestions: vec!["🙂 Could use more engagement or support.".to_string()],
        };

        let text = render(&classification);
        assert!(text.starts_with(UNCLASSIFIED_WARNING));
        assert!(text.contains("Sentiment: Neutral"));
        assert!(!text.contains("Suggested Improvements"));
    }

    #[test]
    fn test_sentiment_assessment() {
        let assessment = SentimentAssessment {
            sentiment: Sentiment::Negative,
            scores: PolarityScores {
                neg: 0.0,
                neu: 1.0,
                pos: 0.0,
                compound: 0.0,
            },
            negative_keyword: Some("slow"),
        };

        let text = render(&assessment);
        assert!(text.starts_with("Sentiment: Negative\n"));
        assert!(text.contains("compound 0.0000"));
        assert!(text.ends_with("Negative keyword: \"slow\"\n"));
    }

    #[test]
    fn test_batch_item_json_is_flat() {
        let item = BatchItem {
            line: 3,
            text: "gym".to_string(),
            classification: Classification {
                categories: [Category::Facilities].into_iter().collect(),
                sentiment: Sentiment::Neutral,
                suggestions: Vec::new(),
            },
        };

        let json = to_json(&item, false).unwrap();
        assert_eq!(
            json,
            r#"{"line":3,"text":"gym","categories":["Facilities"],"sentiment":"Neutral","suggestions":[]}"#
        );
    }
}
