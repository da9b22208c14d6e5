//! Benchmarks for paragraph alignment.
//!
//! Run with: cargo bench --bench align_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use docdiff::diff::DiffEngine;
use docdiff::matching::{AlignmentStrategy, GreedyAligner, OrderedAligner, ParagraphAligner};
use docdiff::model::Paragraph;
use std::hint::black_box;

const WORDS: &[&str] = &[
    "supplier", "customer", "shall", "deliver", "services", "within", "days", "of", "notice",
    "payment", "invoice", "agreement", "term", "party", "written", "consent",
];

/// Generate a document of `count` clause-like paragraphs.
fn generate_paragraphs(prefix: &str, count: usize) -> Vec<Paragraph> {
    (0..count)
        .map(|i| {
            let text: Vec<&str> = (0..12).map(|w| WORDS[(i * 7 + w * 3) % WORDS.len()]).collect();
            Paragraph::new(
                1 + (i / 10) as u32,
                i % 10,
                format!("{prefix} {i}: {}.", text.join(" ")),
            )
        })
        .collect()
}

/// Generate a revised version with every fifth paragraph reworded.
fn generate_pair(count: usize) -> (Vec<Paragraph>, Vec<Paragraph>) {
    let old = generate_paragraphs("Clause", count);
    let new = old
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i % 5 == 0 {
                Paragraph::new(p.page_number, p.index, format!("{} Amended.", p.text))
            } else {
                p.clone()
            }
        })
        .collect();
    (old, new)
}

fn bench_aligners(c: &mut Criterion) {
    let mut group = c.benchmark_group("align");

    for size in [20, 80, 200] {
        let (old, new) = generate_pair(size);

        group.bench_with_input(BenchmarkId::new("greedy", size), &size, |b, _| {
            let aligner = GreedyAligner::default();
            b.iter(|| aligner.align(black_box(&old), black_box(&new)));
        });

        group.bench_with_input(BenchmarkId::new("ordered", size), &size, |b, _| {
            let aligner = OrderedAligner::new(0.6);
            b.iter(|| aligner.align(black_box(&old), black_box(&new)));
        });
    }

    group.finish();
}

fn bench_full_compare(c: &mut Criterion) {
    let (old, new) = generate_pair(100);

    c.bench_function("compare_100_greedy", |b| {
        let engine = DiffEngine::new();
        b.iter(|| engine.compare_paragraphs(black_box(&old), black_box(&new)));
    });

    c.bench_function("compare_100_ordered", |b| {
        let engine = DiffEngine::new().with_strategy(AlignmentStrategy::Ordered);
        b.iter(|| engine.compare_paragraphs(black_box(&old), black_box(&new)));
    });
}

criterion_group!(benches, bench_aligners, bench_full_compare);
criterion_main!(benches);
