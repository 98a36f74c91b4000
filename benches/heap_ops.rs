//! Heap operation benchmarks
//!
//! Wall-clock counterparts of the `benchmark-runner` binary, which counts
//! operations instead of timing them.
//!
//! ## Groups
//!
//! - **build**: bulk build vs. repeated insertion of the same input
//! - **extract**: draining half the heap
//! - **decrease_key**: handle-based vs. index-based decrease
//! - **merge**: rebuild-merge vs. `std::collections::BinaryHeap::append`
//!
//! Inputs come from a seeded LCG so every run sees the same data.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rust_min_heap::indexed::IndexedMinHeap;
use rust_min_heap::min_heap::MinHeap;
use rust_min_heap::{NaturalOrder, NoopObserver};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

// ============================================================================
// Simple PRNG for reproducible benchmarks
// ============================================================================

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        (self.next() >> 16) % bound
    }
}

fn random_input(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next_below(10 * n as u64) as i64).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &n in &SIZES {
        let input = random_input(n, 42);

        group.bench_with_input(BenchmarkId::new("from_vec", n), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |values| black_box(MinHeap::from_vec(values)),
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("repeated_insert", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = MinHeap::with_capacity(input.len());
                for &v in input {
                    heap.insert(v);
                }
                black_box(heap)
            })
        });
        group.bench_with_input(BenchmarkId::new("indexed_from_vec", n), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |values| {
                    black_box(IndexedMinHeap::from_vec_with_handles(
                        values,
                        NaturalOrder,
                        NoopObserver,
                    ))
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn benchmark_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    group.sample_size(20);

    for &n in &SIZES {
        let heap = MinHeap::from_vec(random_input(n, 7));
        let (indexed, _) =
            IndexedMinHeap::from_vec_with_handles(random_input(n, 7), NaturalOrder, NoopObserver);

        group.bench_with_input(BenchmarkId::new("min_heap", n), &heap, |b, heap| {
            b.iter_batched(
                || heap.clone(),
                |mut heap| {
                    for _ in 0..n / 2 {
                        black_box(heap.extract_min().ok());
                    }
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("indexed", n), &indexed, |b, heap| {
            b.iter_batched(
                || heap.clone(),
                |mut heap| {
                    for _ in 0..n / 2 {
                        black_box(heap.extract_min().ok());
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn benchmark_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");
    group.sample_size(20);

    for &n in &SIZES {
        let input = random_input(n, 99);
        let heap = MinHeap::from_vec(input.clone());

        // Handles only work on the heap that issued them, so every batch
        // builds its own heap instead of cloning one
        group.bench_with_input(BenchmarkId::new("by_handle", n), &input, |b, input| {
            b.iter_batched(
                || IndexedMinHeap::from_vec_with_handles(input.clone(), NaturalOrder, NoopObserver),
                |(mut heap, handles)| {
                    let mut rng = Lcg::new(5);
                    for _ in 0..1000 {
                        let handle = &handles[rng.next_below(n as u64) as usize];
                        if let Some(&current) = heap.get(handle) {
                            black_box(heap.decrease_key(handle, current - 1)).ok();
                        }
                    }
                    black_box(heap)
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("by_index", n), &heap, |b, heap| {
            b.iter_batched(
                || heap.clone(),
                |mut heap| {
                    let mut rng = Lcg::new(5);
                    for _ in 0..1000 {
                        let index = rng.next_below(n as u64) as usize;
                        if let Some(&current) = heap.get(index) {
                            black_box(heap.decrease_key(index, current - 1)).ok();
                        }
                    }
                    black_box(heap)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    group.sample_size(20);

    for &n in &SIZES {
        let left = random_input(n, 1);
        let right = random_input(n, 2);

        group.bench_with_input(
            BenchmarkId::new("min_heap", n),
            &(left.clone(), right.clone()),
            |b, (left, right)| {
                b.iter_batched(
                    || (MinHeap::from_vec(left.clone()), MinHeap::from_vec(right.clone())),
                    |(mut a, mut other)| {
                        a.merge(&mut other);
                        black_box(a)
                    },
                    BatchSize::LargeInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("std_binary_heap_append", n),
            &(left, right),
            |b, (left, right)| {
                b.iter_batched(
                    || {
                        let a: BinaryHeap<Reverse<i64>> = left.iter().copied().map(Reverse).collect();
                        let other: BinaryHeap<Reverse<i64>> =
                            right.iter().copied().map(Reverse).collect();
                        (a, other)
                    },
                    |(mut a, mut other)| {
                        a.append(&mut other);
                        black_box(a)
                    },
                    BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_build,
    benchmark_extract,
    benchmark_decrease_key,
    benchmark_merge,
);

criterion_main!(benches);
