//! Scanning throughput benchmarks
//!
//! Run with: cargo bench --bench scan_benchmarks

use acmatch_core::Trie;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const VOCABULARY: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "he", "she", "his", "hers", "sugar", "cane",
    "turning", "once", "again",
];

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base = "Turning once again, she sugared the cane while he read his alpha beta notes. ";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

/// Keyword set of the requested size, padded with synthetic words
fn keywords(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match VOCABULARY.get(i) {
            Some(word) => word.to_string(),
            None => format!("kw{i:05}"),
        })
        .collect()
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let trie = Trie::builder()
        .keywords(keywords(VOCABULARY.len()).into_iter().map(|k| (k, ())))
        .build();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("find_matches", size), &text, |b, text| {
            b.iter(|| trie.find_matches(black_box(text)).len());
        });
    }

    group.finish();
}

fn bench_keyword_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyword_counts");
    let text = generate_text(102_400);

    for count in [10, 1_000, 10_000] {
        let trie = Trie::builder()
            .keywords(keywords(count).into_iter().map(|k| (k, ())))
            .build();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("keywords", count), &text, |b, text| {
            b.iter(|| trie.find_matches(black_box(text)).len());
        });
    }

    group.finish();
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies");
    let text = generate_text(102_400);
    let words = keywords(VOCABULARY.len());

    let policies = [
        ("raw", false, false, true),
        ("case_insensitive", true, false, true),
        ("whole_words", false, true, true),
        ("no_overlaps", false, false, false),
    ];

    for (name, case_insensitive, whole_words, overlaps) in policies {
        let trie = Trie::builder()
            .case_insensitive(case_insensitive)
            .only_whole_words(whole_words)
            .allow_overlaps(overlaps)
            .keywords(words.iter().cloned().map(|k| (k, ())))
            .build();
        group.bench_function(name, |b| b.iter(|| trie.find_matches(black_box(&text)).len()));
    }

    group.bench_function("tokenize", |b| {
        let trie = Trie::builder()
            .allow_overlaps(false)
            .keywords(words.iter().cloned().map(|k| (k, ())))
            .build();
        b.iter(|| trie.tokenize(black_box(&text)).len())
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let words = keywords(10_000);
    c.bench_function("build_10k_keywords", |b| {
        b.iter(|| {
            Trie::builder()
                .keywords(black_box(&words).iter().cloned().map(|k| (k, ())))
                .build()
                .state_count()
        })
    });
}

criterion_group!(
    benches,
    bench_text_sizes,
    bench_keyword_counts,
    bench_policies,
    bench_build
);
criterion_main!(benches);
