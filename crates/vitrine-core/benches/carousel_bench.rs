//! Benchmarks for filtering and carousel navigation
//!
//! Run with: cargo bench -p vitrine-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vitrine_core::{
    AbsoluteIndex, AnimationTiming, Direction, FilterController, FilterVariant, Lightbox,
    MatchMode, VisibilityFilter, VisibleSubset,
};

const CATEGORIES: [&str; 4] = ["food", "interior", "events", "team"];

fn categories(n: usize) -> Vec<String> {
    (0..n).map(|i| CATEGORIES[i % CATEGORIES.len()].to_string()).collect()
}

fn bench_derive_subset(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_subset");
    for size in [100usize, 1_000, 10_000] {
        let items = categories(size);
        let filter = VisibilityFilter::parse("events");
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| black_box(VisibleSubset::derive(items, &filter, MatchMode::Exact)))
        });
    }
    group.finish();
}

fn bench_apply_filter(c: &mut Criterion) {
    let timing = AnimationTiming::default();
    let items = categories(1_000);
    c.bench_function("apply_filter_1000", |b| {
        b.iter_batched(
            || FilterController::new(&items, FilterVariant::menu(&timing), &timing),
            |mut controller| black_box(controller.apply("food")),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_full_cycle(c: &mut Criterion) {
    let subset = VisibleSubset::full(1_000);
    c.bench_function("step_full_cycle_1000", |b| {
        b.iter(|| {
            let mut lightbox = Lightbox::new();
            lightbox.open(AbsoluteIndex::new(0), &subset);
            for _ in 0..subset.len() {
                black_box(lightbox.step(Direction::Next, &subset));
            }
            lightbox.cursor()
        })
    });
}

criterion_group!(benches, bench_derive_subset, bench_apply_filter, bench_full_cycle);
criterion_main!(benches);
