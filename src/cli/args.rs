//! Command line argument parsing for the feedback classifier CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::error::Result;

/// Classify campus feedback into categories and sentiment
#[derive(Parser, Debug, Clone)]
#[command(name = "feedback-classifier")]
#[command(about = "Classify short feedback comments into categories and sentiment")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FeedbackArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Classifier configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FeedbackArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// The configuration file named by `--config`, or the defaults.
    pub fn load_config(&self) -> Result<ClassifierConfig> {
        match &self.config {
            Some(path) => ClassifierConfig::from_file(path),
            None => Ok(ClassifierConfig::default()),
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a single feedback comment
    Classify(ClassifyArgs),

    /// Classify every line of a file
    Batch(BatchArgs),

    /// Show the sentiment of a comment (no model needed)
    Sentiment(SentimentArgs),

    /// Load the model artifacts and describe them
    Inspect(InspectArgs),
}

/// Artifact locations; override the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Classifier artifact (JSON)
    #[arg(long, value_name = "MODEL_FILE", env = "FEEDBACK_MODEL_PATH")]
    pub model: Option<PathBuf>,

    /// Vectorizer artifact (JSON)
    #[arg(long, value_name = "VECTORIZER_FILE", env = "FEEDBACK_VECTORIZER_PATH")]
    pub vectorizer: Option<PathBuf>,
}

impl ModelArgs {
    /// Apply the paths given on the command line to `config`.
    pub fn apply(&self, config: &mut ClassifierConfig) {
        if let Some(model) = &self.model {
            config.model_path = model.clone();
        }
        if let Some(vectorizer) = &self.vectorizer {
            config.vectorizer_path = vectorizer.clone();
        }
    }
}

/// Arguments for classifying one comment
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Feedback text
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments for batch classification
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one feedback comment per line
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Number of worker threads (overrides the configuration file)
    #[arg(short, long)]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments for sentiment detection
#[derive(Parser, Debug, Clone)]
pub struct SentimentArgs {
    /// Feedback text
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for inspecting the artifacts
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
