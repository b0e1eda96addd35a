//! Criterion micro-benchmarks for single-pile mutations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strata_core::ItemUpdate;
use strata_stack::{BoundedStack, Pile, UnboundedStack};
use strata_test_utils::fixtures;

/// Benchmark: fill a bounded pile of height 16, then empty it from the top.
fn bench_push_pop_bounded(c: &mut Criterion) {
    let keys = fixtures::bounded_keys(1, 16, 8);
    let mut pile = BoundedStack::new(keys, 0);
    let item = ItemUpdate::new(3, 1).rotation(2);

    c.bench_function("push_pop_bounded_16", |b| {
        b.iter(|| {
            let mut hash = 0u64;
            for _ in 0..16 {
                pile.push(&item).unwrap().apply(&mut hash);
            }
            while let Some(top) = pile.top() {
                pile.remove_at(top).unwrap().1.apply(&mut hash);
            }
            black_box(hash);
        });
    });
}

/// Benchmark: insert and remove at the bottom of a half-full pile, the
/// worst case for re-keying.
fn bench_insert_remove_bottom(c: &mut Criterion) {
    let keys = fixtures::hidden_keys(1, 16, 8, 3);
    let mut pile = BoundedStack::new(keys, 0);
    for what in 1..=8 {
        pile.push(&ItemUpdate::new(what % 7 + 1, 1)).unwrap();
    }
    let item = ItemUpdate::new(5, 2);

    c.bench_function("insert_remove_bottom_bounded_8", |b| {
        b.iter(|| {
            let d1 = pile.insert_at(0, &item).unwrap();
            let (_, d2) = pile.remove_at(0).unwrap();
            black_box(d1 ^ d2);
        });
    });
}

/// Benchmark: the same cycle on an unbounded pile, which skips hashing.
fn bench_insert_remove_unbounded(c: &mut Criterion) {
    let mut pile = UnboundedStack::new(None);
    for what in 1..=8 {
        pile.push(&ItemUpdate::new(what, 1)).unwrap();
    }
    let item = ItemUpdate::new(5, 2);

    c.bench_function("insert_remove_bottom_unbounded_8", |b| {
        b.iter(|| {
            pile.insert_at(0, &item).unwrap();
            black_box(pile.remove_at(0).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_push_pop_bounded,
    bench_insert_remove_bottom,
    bench_insert_remove_unbounded
);
criterion_main!(benches);
