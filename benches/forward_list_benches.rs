use std::collections::LinkedList;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use forward_list::ForwardList;
use rand::{Rng, SeedableRng, rngs::StdRng};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn push_front_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_front");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("forward_list", size), |b| {
            b.iter(|| {
                let mut list = ForwardList::new();
                for i in 0..size {
                    list.push_front(black_box(i));
                }
                list
            })
        });

        group.bench_function(BenchmarkId::new("std_linked_list", size), |b| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..size {
                    list.push_front(black_box(i));
                }
                list
            })
        });
    }

    group.finish();
}

fn iterate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for size in SIZES {
        let list: ForwardList<usize> = (0..size).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("sum", size), |b| {
            b.iter(|| black_box(list.iter().sum::<usize>()))
        });
    }

    group.finish();
}

// Insert and erase behind positions picked at random, so slots get recycled
// through the free list.
fn churn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_erase_after");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("churn", size), |b| {
            b.iter_with_setup(
                || {
                    let list: ForwardList<usize> = (0..size).collect();
                    let mut positions = Vec::with_capacity(size);
                    let mut position = list.begin();
                    while !position.is_end() {
                        positions.push(position);
                        position = list.next_position(position).unwrap();
                    }
                    let mut rng = StdRng::seed_from_u64(size as u64);
                    let picks: Vec<usize> =
                        (0..size).map(|_| rng.random_range(0..positions.len())).collect();
                    (list, positions, picks)
                },
                |(mut list, positions, picks)| {
                    for pick in picks {
                        let anchor = positions[pick];
                        let inserted = list.insert_after(anchor, pick).unwrap();
                        black_box(list.erase_after(anchor).unwrap());
                        debug_assert!(list.get(inserted).is_err());
                    }
                    list
                },
            )
        });
    }

    group.finish();
}

fn clone_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for size in SIZES {
        let list: ForwardList<usize> = (0..size).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("clone", size), |b| {
            b.iter(|| black_box(list.clone()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    push_front_benchmark,
    iterate_benchmark,
    churn_benchmark,
    clone_benchmark
);
criterion_main!(benches);
