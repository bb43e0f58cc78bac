//! Typed allocator benchmarks
//!
//! Measures the allocate / construct / destroy / deallocate cycle against
//! the raw system allocator it wraps.

#![allow(unsafe_code)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::alloc::Layout;
use std::hint::black_box;
use tinystl_foundation::allocator::Allocator;

/// Benchmark single allocation/deallocation cycle
fn bench_single_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_allocation");

    group.bench_function("typed_u64", |b| {
        b.iter(|| unsafe {
            let storage = Allocator::<u64>::allocate().unwrap();
            black_box(storage.as_mut_ptr());
            Allocator::<u64>::deallocate(storage);
        });
    });

    // System allocator (baseline)
    group.bench_function("system_u64", |b| {
        let layout = Layout::new::<u64>();

        b.iter(|| unsafe {
            let ptr = std::alloc::alloc(layout);
            black_box(ptr);
            std::alloc::dealloc(ptr, layout);
        });
    });

    group.finish();
}

/// Benchmark the full object lifecycle over n slots
fn bench_object_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("object_lifecycle");

    for n in [16_usize, 256, 4096] {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("construct_range", n), &n, |b, &n| {
            b.iter(|| unsafe {
                let storage = Allocator::<String>::allocate_n(n).unwrap();
                let first = storage.slot(0).unwrap();
                Allocator::<String>::try_construct_range(first, n, |i| {
                    Ok::<_, ()>(i.to_string())
                })
                .unwrap();
                black_box(first.as_ref());
                Allocator::<String>::destroy_n(first, n);
                Allocator::<String>::deallocate(storage);
            });
        });

        group.bench_with_input(BenchmarkId::new("construct_copy", n), &n, |b, &n| {
            let proto = String::from("prototype");
            b.iter(|| unsafe {
                let storage = Allocator::<String>::allocate_n(n).unwrap();
                let first = storage.slot(0).unwrap();
                Allocator::<String>::construct_range_copy(first, n, &proto);
                black_box(first.as_ref());
                Allocator::<String>::destroy_range(first, storage.end().unwrap());
                Allocator::<String>::deallocate(storage);
            });
        });

        // Same workload through Vec (baseline)
        group.bench_with_input(BenchmarkId::new("vec_baseline", n), &n, |b, &n| {
            b.iter(|| {
                let v: Vec<String> = (0..n).map(|i| i.to_string()).collect();
                black_box(&v);
            });
        });
    }

    group.finish();
}

/// Benchmark growth: move elements into a larger block
fn bench_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth");
    group.throughput(Throughput::Elements(1024));

    group.bench_function("move_1024", |b| {
        b.iter(|| unsafe {
            let old = Allocator::<Vec<u8>>::allocate_n(1024).unwrap();
            Allocator::<Vec<u8>>::try_construct_range(old.slot(0).unwrap(), 1024, |_| {
                Ok::<_, ()>(Vec::new())
            })
            .unwrap();

            let new = Allocator::<Vec<u8>>::allocate_n(2048).unwrap();
            for i in 0..1024 {
                let moved = old.slot(i).unwrap().read();
                Allocator::<Vec<u8>>::construct_move(new.slot(i).unwrap(), moved);
            }
            Allocator::<Vec<u8>>::deallocate(old);

            black_box(new.as_mut_ptr());
            Allocator::<Vec<u8>>::destroy_n(new.slot(0).unwrap(), 1024);
            Allocator::<Vec<u8>>::deallocate(new);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_allocation,
    bench_object_lifecycle,
    bench_growth
);
criterion_main!(benches);
