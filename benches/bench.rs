//! Criterion benchmarks for the feedback classifier.
//!
//! Covers text normalization, sentiment detection and full classification
//! with a small in-memory model.

use std::collections::HashMap;
use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use feedback_classifier::classifier::FeedbackClassifier;
use feedback_classifier::model::{
    LogisticRegressionArtifact, LogisticRegressionClassifier, PredictorArtifacts, TfIdfArtifact,
    TfIdfVectorizer,
};
use feedback_classifier::normalizer::TextNormalizer;
use feedback_classifier::sentiment::SentimentDetector;

const TERMS: [&str; 10] = [
    "wifi", "slow", "librari", "exam", "lectur", "fee", "offic", "portal", "hostel", "teacher",
];

/// Generate feedback comments for benchmarking.
fn generate_feedback(count: usize) -> Vec<String> {
    let fragments = [
        "the wifi in the library is extremely slow",
        "lectures are great but exams are too long",
        "the office never replied to my email",
        "fees on the portal are confusing",
        "hostel rooms are dirty and the fan is broken",
        "teachers are very helpful and kind",
        "the timetable changed again without notice",
        "labs close early on weekends",
    ];

    (0..count)
        .map(|i| {
            let first = fragments[i % fragments.len()];
            let second = fragments[(i * 3 + 1) % fragments.len()];
            format!("{first} and {second}")
        })
        .collect()
}

fn build_classifier() -> FeedbackClassifier {
    let vocabulary: HashMap<String, usize> = TERMS
        .iter()
        .enumerate()
        .map(|(idx, term)| (term.to_string(), idx))
        .collect();
    let vectorizer =
        TfIdfVectorizer::from_artifact(TfIdfArtifact::new(vocabulary, vec![1.5; TERMS.len()]))
            .unwrap();

    let mut coefficients = vec![vec![0.0; TERMS.len()]; 3];
    for (row, columns) in [vec![3, 4, 9], vec![0, 1, 2, 8], vec![5, 6, 7]]
        .into_iter()
        .enumerate()
    {
        for column in columns {
            coefficients[row][column] = 4.0;
        }
    }
    let classifier = LogisticRegressionClassifier::from_artifact(LogisticRegressionArtifact::new(
        coefficients,
        vec![-1.0; 3],
    ))
    .unwrap();

    let artifacts = PredictorArtifacts::new(Arc::new(vectorizer), Arc::new(classifier)).unwrap();
    FeedbackClassifier::new(artifacts).unwrap()
}

/// Benchmark stemming normalization.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let normalizer = TextNormalizer::new().unwrap();
    let texts = generate_feedback(100);

    group.bench_function("normalize_single_comment", |b| {
        b.iter(|| black_box(normalizer.normalize(black_box(&texts[0]))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("normalize_batch_comments", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(normalizer.normalize(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark sentiment detection.
fn bench_sentiment(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentiment");

    let detector = SentimentDetector::new();
    let texts = generate_feedback(100);

    group.bench_function("detect_single_comment", |b| {
        b.iter(|| black_box(detector.detect(black_box(&texts[1]))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("assess_batch_comments", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(detector.assess(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark full classification, sequential and parallel.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let classifier = build_classifier();
    let texts = generate_feedback(1000);

    group.bench_function("classify_single_comment", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&texts[0]))))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("classify_sequential", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(classifier.classify(text));
            }
        })
    });

    group.bench_function("classify_batch_parallel", |b| {
        b.iter(|| black_box(classifier.classify_batch(black_box(&texts))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalization,
    bench_sentiment,
    bench_classification
);

criterion_main!(benches);
