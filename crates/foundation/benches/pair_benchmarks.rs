//! Pair benchmarks
//!
//! Comparison and swap should cost no more than the equivalent std tuple.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tinystl_foundation::Pair;
use tinystl_foundation::utility::swap_range;

fn make_pairs(n: usize) -> Vec<Pair<u32, u32>> {
    (0..n as u32).map(|i| Pair::new(i % 17, i.wrapping_mul(2_654_435_761))).collect()
}

/// Sorting exercises the lexicographic ordering
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for n in [64_usize, 1024, 16_384] {
        let pairs = make_pairs(n);
        let tuples: Vec<(u32, u32)> = pairs.iter().map(|p| p.into_tuple()).collect();

        group.bench_with_input(BenchmarkId::new("pair", n), &pairs, |b, pairs| {
            b.iter(|| {
                let mut v = pairs.clone();
                v.sort_unstable();
                black_box(v);
            });
        });

        // std tuple (baseline)
        group.bench_with_input(BenchmarkId::new("tuple", n), &tuples, |b, tuples| {
            b.iter(|| {
                let mut v = tuples.clone();
                v.sort_unstable();
                black_box(v);
            });
        });
    }

    group.finish();
}

fn bench_swap(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap");

    group.bench_function("pair_strings", |b| {
        let mut x = Pair::new(String::from("left"), vec![1_u8; 32]);
        let mut y = Pair::new(String::from("right"), vec![2_u8; 32]);
        b.iter(|| {
            x.swap(black_box(&mut y));
        });
    });

    group.bench_function("swap_range_1024", |b| {
        let mut left = make_pairs(1024);
        let mut right = make_pairs(1024);
        b.iter(|| {
            swap_range(left.iter_mut(), right.iter_mut());
            black_box(&left);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sort, bench_swap);
criterion_main!(benches);
