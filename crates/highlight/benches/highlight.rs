//! Benchmarks for query highlighting.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use querymark_highlight::{highlight, highlight_all, longest_common_substrings, HighlightCache};

const DESCRIPTIONS: &[&str] = &[
    "Turn on Wi-Fi",
    "Connect to a Bluetooth device",
    "Change display size and screen resolution",
    "Crème brûlée – caramelised custard",
    "ディスプレイの明るさ",
    "一二三四五六七八九十",
];

fn create_descriptions(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{} #{i}", DESCRIPTIONS[i % DESCRIPTIONS.len()]))
        .collect()
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight_single");

    for (name, query) in [("short", "wifi"), ("multi", "turn wi fi on"), ("cjk", "三一")] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for description in DESCRIPTIONS {
                    black_box(highlight(black_box(description), black_box(query)));
                }
            })
        });
    }

    group.finish();
}

fn bench_lcs(c: &mut Criterion) {
    let description = "change display size and screen resolution for external monitors";

    c.bench_function("lcs_long_description", |b| {
        b.iter(|| longest_common_substrings(black_box("resolution"), black_box(description)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight_batch");

    for size in [10, 100, 1000].iter() {
        let descriptions = create_descriptions(*size);

        group.bench_with_input(BenchmarkId::new("highlight_all", size), size, |b, _| {
            b.iter(|| highlight_all(black_box(&descriptions), black_box("display")))
        });
    }

    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let cache = HighlightCache::default();

    c.bench_function("cache_hit", |b| {
        b.iter(|| cache.highlight(black_box("Turn on Wi-Fi"), black_box("wifi")))
    });
}

criterion_group!(benches, bench_single, bench_lcs, bench_batch, bench_cache);
criterion_main!(benches);
