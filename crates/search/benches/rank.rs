//! Benchmarks for local shop ranking.

use beanhop_search::{levenshtein_distance, rank_shops, Shop};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const NAMES: &[&str] = &[
    "Moonbean Coffee",
    "Chapter Coffee",
    "Opal Coffee",
    "Pilot Coffee Roasters",
    "Sam James Coffee Bar",
    "Dark Horse Espresso",
    "Neo Coffee Bar",
    "Boxcar Social",
];

fn create_shops(count: usize) -> Vec<Shop> {
    (0..count)
        .map(|i| {
            Shop::new(i.to_string(), format!("{} #{i}", NAMES[i % NAMES.len()]))
                .with_description("Specialty coffee, pastries and matcha")
                .with_address(format!("{} Queen St W", 100 + i))
        })
        .collect()
}

fn bench_levenshtein(c: &mut Criterion) {
    c.bench_function("levenshtein_typo", |b| {
        b.iter(|| levenshtein_distance(black_box("moonbeon"), black_box("moonbean coffee")))
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_shops");

    for size in [10, 100, 1000, 10000].iter() {
        let shops = create_shops(*size);

        group.bench_with_input(BenchmarkId::new("prefix", size), size, |b, _| {
            b.iter(|| rank_shops(black_box("opal"), black_box(&shops)))
        });

        group.bench_with_input(BenchmarkId::new("typo", size), size, |b, _| {
            b.iter(|| rank_shops(black_box("opel cofee"), black_box(&shops)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_rank);
criterion_main!(benches);
