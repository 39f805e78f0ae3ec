//! Benchmark for Optional and Outcome combinators.
//!
//! Compares combinator chains against the equivalent hand-written matches
//! to evaluate the overhead (if any) of the containers.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use optres::extension::{optional_transpose, outcome_transpose};
use optres::{Optional, Outcome};
use std::hint::black_box;

// =============================================================================
// Optional Benchmarks
// =============================================================================

fn benchmark_optional_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_chain");

    group.bench_function("combinator_filter_map", |bencher| {
        bencher.iter(|| {
            let value = Optional::Some(black_box(15));
            black_box(
                value
                    .filter(|number| *number > 10)
                    .map(|number| number * 2)
                    .unwrap_or(0),
            )
        });
    });

    group.bench_function("manual_filter_map", |bencher| {
        bencher.iter(|| {
            let value = Optional::Some(black_box(15));
            let result = match value {
                Optional::Some(number) if number > 10 => number * 2,
                _ => 0,
            };
            black_box(result)
        });
    });

    group.bench_function("combinator_xor", |bencher| {
        bencher.iter(|| {
            let left = Optional::Some(black_box(1));
            let right: Optional<i32> = Optional::None;
            black_box(left.xor(right))
        });
    });

    group.finish();
}

// =============================================================================
// Outcome Benchmarks
// =============================================================================

fn benchmark_outcome_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_chain");

    group.bench_function("combinator_map_and_then_ok", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<i32, String> = Outcome::Ok(black_box(3));
            black_box(
                outcome
                    .map(|number| number * 2)
                    .and_then(|number| {
                        if number > 0 {
                            Outcome::Ok(number.to_string())
                        } else {
                            Outcome::Err("negative".to_string())
                        }
                    }),
            )
        });
    });

    group.bench_function("manual_map_and_then_ok", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<i32, String> = Outcome::Ok(black_box(3));
            let result: Outcome<String, String> = match outcome {
                Outcome::Ok(number) if number * 2 > 0 => Outcome::Ok((number * 2).to_string()),
                Outcome::Ok(_) => Outcome::Err("negative".to_string()),
                Outcome::Err(error) => Outcome::Err(error),
            };
            black_box(result)
        });
    });

    group.bench_function("combinator_map_err", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<i32, String> = Outcome::Err(black_box("error".to_string()));
            black_box(outcome.map(|number| number * 2).map_err(|error| error.len()))
        });
    });

    group.finish();
}

// =============================================================================
// Transpose Benchmarks
// =============================================================================

fn benchmark_transpose(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("transpose");

    for size in [100, 1000, 10000] {
        let values: Vec<Optional<Outcome<i32, i32>>> = (0..size)
            .map(|index| match index % 3 {
                0 => Optional::None,
                1 => Optional::Some(Outcome::Ok(index)),
                _ => Optional::Some(Outcome::Err(index)),
            })
            .collect();

        group.throughput(Throughput::Elements(values.len() as u64));

        group.bench_with_input(BenchmarkId::new("roundtrip", size), &values, |bencher, values| {
            bencher.iter(|| {
                values
                    .iter()
                    .map(|value| outcome_transpose(optional_transpose(*value)))
                    .filter(Optional::is_some)
                    .count()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_optional_chain,
    benchmark_outcome_chain,
    benchmark_transpose
);
criterion_main!(benches);
