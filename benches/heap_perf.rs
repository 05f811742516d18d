//! Criterion benchmarks for ArrayHeap
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//!
//! # Only the arbitrary-removal workloads
//! cargo bench --bench heap_perf -- remove
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_array_heap::compare::NaturalOrder;
use rust_array_heap::ArrayHeap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

const SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 16];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 33
    }
}

fn random_values(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next() as u32).collect()
}

fn filled_heap(values: &[u32]) -> ArrayHeap<u32> {
    let mut heap = ArrayHeap::new();
    for &v in values {
        heap.insert(v).unwrap();
    }
    heap
}

fn benchmark_insert_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_extract");
    for n in SIZES {
        let values = random_values(n, 42);

        group.bench_with_input(BenchmarkId::new("array_heap", n), &values, |b, values| {
            b.iter(|| {
                let mut heap = filled_heap(values);
                while let Ok(v) = heap.extract_min() {
                    black_box(v);
                }
            })
        });

        group.bench_with_input(
            BenchmarkId::new("array_heap_reversed", n),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut heap: ArrayHeap<u32, _> =
                        ArrayHeap::with_comparator(NaturalOrder.reversed());
                    for &v in values {
                        heap.insert(v).unwrap();
                    }
                    while let Ok(v) = heap.extract_min() {
                        black_box(v);
                    }
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("std_binary_heap", n), &values, |b, values| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(8);
                for &v in values {
                    heap.push(Reverse(v));
                }
                while let Some(v) = heap.pop() {
                    black_box(v);
                }
            })
        });
    }
    group.finish();
}

fn benchmark_remove_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_at");
    for n in SIZES {
        let values = random_values(n, 7);
        let heap = filled_heap(&values);

        group.bench_with_input(BenchmarkId::new("random_index", n), &heap, |b, heap| {
            b.iter(|| {
                let mut heap = heap.clone();
                let mut rng = Lcg::new(11);
                while !heap.is_empty() {
                    let index = (rng.next() as usize) % heap.len();
                    black_box(heap.remove_at(index).unwrap());
                }
            })
        });
    }
    group.finish();
}

fn benchmark_remove_by_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_by_value");
    for n in [1usize << 8, 1 << 12] {
        let values = random_values(n, 3);
        let heap = filled_heap(&values);

        group.bench_with_input(BenchmarkId::new("present", n), &heap, |b, heap| {
            b.iter(|| {
                let mut heap = heap.clone();
                for v in values.iter().step_by(16) {
                    black_box(heap.remove(v).unwrap());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert_extract,
    benchmark_remove_at,
    benchmark_remove_by_value
);
criterion_main!(benches);
