//! Command implementations for the feedback classifier CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;

use anyhow::Context;

use crate::classifier::{FeedbackClassifier, build_thread_pool};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ClassifierConfig;
use crate::error::{FeedbackError, Result};
use crate::model::{LogisticRegressionClassifier, PredictorArtifacts, TfIdfVectorizer};
use crate::sentiment::SentimentDetector;

/// Message shown when the feedback text is empty.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some feedback text.";

/// Execute a CLI command.
pub fn execute_command(args: FeedbackArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify(classify_args, &args),
        Command::Batch(batch_args) => batch(batch_args, &args),
        Command::Sentiment(sentiment_args) => sentiment(sentiment_args, &args),
        Command::Inspect(inspect_args) => inspect(inspect_args, &args),
    }
}

/// Reject empty or whitespace-only feedback before any model work happens.
pub fn require_feedback_text(text: &str) -> Result<&str> {
    if text.trim().is_empty() {
        return Err(FeedbackError::invalid_argument(EMPTY_INPUT_MESSAGE));
    }
    Ok(text)
}

/// Resolve the configuration: file (or defaults), then command line overrides.
fn resolve_config(model_args: &ModelArgs, cli_args: &FeedbackArgs) -> Result<ClassifierConfig> {
    let mut config = cli_args.load_config()?;
    model_args.apply(&mut config);
    log::debug!("Using configuration {config:?}");
    Ok(config)
}

/// Classify a single comment.
fn classify(args: &ClassifyArgs, cli_args: &FeedbackArgs) -> Result<()> {
    let text = require_feedback_text(&args.text)?;
    let config = resolve_config(&args.model, cli_args)?;
    let classifier = FeedbackClassifier::from_config(&config)?;

    let classification = classifier.classify(text)?;
    output_result("Feedback classified", &classification, cli_args)
}

/// Classify every non-blank line of a file in parallel.
fn batch(args: &BatchArgs, cli_args: &FeedbackArgs) -> Result<()> {
    let mut config = resolve_config(&args.model, cli_args)?;
    if args.threads.is_some() {
        config.threads = args.threads;
    }
    config.validate()?;

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    let mut texts = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            log::warn!("Skipping blank line {}", line_num + 1);
            continue;
        }
        lines.push(line_num + 1);
        texts.push(line);
    }
    log::info!(
        "Read {} comment(s) from {}",
        texts.len(),
        args.input.display()
    );

    let classifier = FeedbackClassifier::from_config(&config)?;
    let pool = build_thread_pool(&config)?;
    let classifications = pool.install(|| classifier.classify_batch(&texts))?;

    let items: Vec<BatchItem> = lines
        .into_iter()
        .zip(texts)
        .zip(classifications)
        .map(|((line, text), classification)| BatchItem {
            line,
            text,
            classification,
        })
        .collect();

    output_results("Batch classified", &items, cli_args)
}

/// Show the sentiment of a comment.
fn sentiment(args: &SentimentArgs, cli_args: &FeedbackArgs) -> Result<()> {
    let text = require_feedback_text(&args.text)?;
    let assessment = SentimentDetector::new().assess(text);
    output_result("Sentiment detected", &assessment, cli_args)
}

/// Load and validate the artifacts, then describe them.
fn inspect(args: &InspectArgs, cli_args: &FeedbackArgs) -> Result<()> {
    let config = resolve_config(&args.model, cli_args)?;

    let vectorizer = TfIdfVectorizer::load(&config.vectorizer_path)?;
    let classifier = LogisticRegressionClassifier::load(&config.model_path)?;
    let vocabulary_size = vectorizer.vocabulary_size();
    let ngram_range = vectorizer.ngram_range();
    let artifacts = PredictorArtifacts::new(Arc::new(vectorizer), Arc::new(classifier))?;

    let summary = ArtifactSummary {
        model_path: config.model_path,
        vectorizer_path: config.vectorizer_path,
        vocabulary_size,
        dimension: artifacts.vectorizer().dimension(),
        labels: artifacts.classifier().labels().to_vec(),
        ngram_range,
    };

    output_result("Artifacts loaded", &summary, cli_args)
}
