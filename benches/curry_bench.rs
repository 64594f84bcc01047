//! Benchmark for the curry transformer.
//!
//! Measures the cost of single-step chains against direct calls, and of
//! branching from a shared intermediate step.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use curried::{Arguments, Bound, Function, Signature, arguments, curry};
use std::hint::black_box;

fn sum(arguments: Arguments<u64>) -> u64 {
    arguments.positional().iter().sum()
}

// =============================================================================
// Chain Benchmarks
// =============================================================================

fn benchmark_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry_chain");

    for arity in [2_usize, 4, 8, 16] {
        let curried = curry(Function::new("sum", arity, sum));

        group.bench_with_input(
            BenchmarkId::new("one_argument_per_call", arity),
            &arity,
            |bencher, &arity| {
                bencher.iter(|| {
                    let mut application = curried.call([1]);
                    for value in 1..arity as u64 {
                        application = match application.call([value]) {
                            Some(next) => next,
                            None => break,
                        };
                    }
                    black_box(application.complete())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("all_arguments_at_once", arity),
            &arity,
            |bencher, &arity| {
                let values: Vec<u64> = (0..arity as u64).collect();
                bencher.iter(|| black_box(curried.call(values.clone()).complete()));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Branching Benchmarks
// =============================================================================

fn benchmark_branching(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry_branching");

    let curried = curry(Function::new("sum", 3, sum));
    let shared = curried.call([1, 2]).partial();

    group.bench_function("complete_from_shared_step", |bencher| {
        bencher.iter(|| {
            shared
                .as_ref()
                .map(|step| black_box(step.call([black_box(3)]).complete()))
        });
    });

    group.finish();
}

// =============================================================================
// Binding Benchmarks
// =============================================================================

fn benchmark_binding(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry_binding");

    let add = curry(Bound::new(
        Signature::new("add")
            .parameter("a")
            .parameter_with_default("b", 10_u64),
        |[a, b]: [u64; 2]| a + b,
    ));

    group.bench_function("positional", |bencher| {
        bencher.iter(|| black_box(add.call(arguments![1, 2]).complete()));
    });

    group.bench_function("named", |bencher| {
        bencher.iter(|| black_box(add.call(arguments![; b = 2, a = 1]).complete()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_chain,
    benchmark_branching,
    benchmark_binding
);
criterion_main!(benches);
