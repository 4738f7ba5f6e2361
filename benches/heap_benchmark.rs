use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linked_heap::generators::{random_bounded, seeded_rng};
use linked_heap::LinkedMinHeap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn bench_insert_then_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_then_drain");

    for &size in &[1_000usize, 10_000, 100_000] {
        let values: Vec<u32> = random_bounded(size, 100, &mut seeded_rng(Some(size as u64)));

        group.bench_with_input(BenchmarkId::new("linked", size), &values, |b, values| {
            b.iter(|| {
                let heap: LinkedMinHeap<u32> = values.iter().copied().collect();
                black_box(heap.into_sorted_vec())
            })
        });

        group.bench_with_input(BenchmarkId::new("std", size), &values, |b, values| {
            b.iter(|| {
                let mut heap: BinaryHeap<Reverse<u32>> = values.iter().copied().map(Reverse).collect();
                let mut out = Vec::with_capacity(values.len());
                while let Some(Reverse(v)) = heap.pop() {
                    out.push(v);
                }
                black_box(out)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert_then_drain);
criterion_main!(benches);
