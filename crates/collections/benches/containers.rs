// Container and pool benchmarks.
//
// Single-threaded cost of the basic operations on each container, plus the
// overhead of pool acquire/release compared to plain construction.

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use tether_collections::pool::{PoolConfig, PoolRegistry};
use tether_collections::{LinkedList, Queue, Stack};

const SIZES: [usize; 3] = [10, 1_000, 100_000];

fn push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    let stack = Stack::new();
    group.bench_function("stack", |b| {
        b.iter(|| {
            stack.push(black_box(1u64));
            black_box(stack.pop())
        })
    });

    let queue = Queue::new();
    group.bench_function("queue", |b| {
        b.iter(|| {
            queue.push(black_box(1u64));
            black_box(queue.pop())
        })
    });

    group.finish();
}

fn peek_and_size(c: &mut Criterion) {
    let stack: Stack<u64> = (0..1_000).collect();
    c.bench_function("stack_peek", |b| b.iter(|| black_box(stack.peek())));
    c.bench_function("stack_size", |b| b.iter(|| black_box(stack.size())));
    c.bench_function("stack_is_empty", |b| b.iter(|| black_box(stack.is_empty())));
}

fn pop_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_all");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("stack", size), &size, |b, &size| {
            b.iter_batched(
                || (0..size as u64).collect::<Stack<_>>(),
                |stack| black_box(stack.pop_all()),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("queue", size), &size, |b, &size| {
            b.iter_batched(
                || (0..size as u64).collect::<Queue<_>>(),
                |queue| black_box(queue.pop_all()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("stack", size), &size, |b, &size| {
            b.iter_batched(
                || (0..size as u64).collect::<Stack<_>>(),
                |stack| stack.clear(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn list_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_append");
    for size in [10usize, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let list = LinkedList::new();
                for i in 0..size as u64 {
                    list.append(i);
                }
                black_box(list)
            })
        });
    }
    group.finish();
}

fn pool_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool");
    let registry = PoolRegistry::new(PoolConfig::bounded(64).with_pre_warm(1));

    group.bench_function("acquire_release", |b| {
        b.iter(|| {
            let stack: Stack<u64> = registry.acquire();
            stack.push(black_box(1));
            registry.release(stack);
        })
    });

    group.bench_function("scoped", |b| {
        b.iter(|| {
            let stack = registry.scoped::<Stack<u64>>();
            stack.push(black_box(1));
        })
    });

    group.bench_function("fresh_instance", |b| {
        b.iter(|| {
            let stack = Stack::new();
            stack.push(black_box(1u64));
            black_box(stack)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    push_pop,
    peek_and_size,
    pop_all,
    clear,
    list_append,
    pool_overhead
);
criterion_main!(benches);
