//! Full step-driven sorts of random arrays, one group per algorithm.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortviz::sort::{Algorithm, Direction, SortEngine, StepSort};
use sortviz::ArrayModel;

fn random_values(len: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    ArrayModel::random(len, 0, 1000, &mut rng)
        .map(|model| model.values().to_vec())
        .unwrap_or_default()
}

fn full_sort_benchmark(c: &mut Criterion) {
    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(algorithm.id());
        for len in [32, 256, 1024] {
            let values = random_values(len);
            group.bench_function(format!("{len}_values"), |b| {
                b.iter_batched(
                    || {
                        let mut rng = StdRng::seed_from_u64(len as u64);
                        let engine = SortEngine::new(
                            algorithm,
                            values.len(),
                            Direction::Ascending,
                            &mut rng,
                        );
                        (engine, values.clone())
                    },
                    |(mut engine, mut values)| {
                        black_box(engine.finish(&mut values))
                    },
                    BatchSize::SmallInput,
                );
            });
        }
        group.finish();
    }
}

fn single_step_benchmark(c: &mut Criterion) {
    let values = random_values(1024);
    c.bench_function("heap_single_step", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = SortEngine::new(
            Algorithm::Heap,
            values.len(),
            Direction::Ascending,
            &mut rng,
        );
        let mut working = values.clone();
        b.iter(|| {
            let step = engine.advance(&mut working);
            if step.done {
                working.copy_from_slice(&values);
                engine = SortEngine::new(
                    Algorithm::Heap,
                    values.len(),
                    Direction::Ascending,
                    &mut rng,
                );
            }
            black_box(step)
        });
    });
}

criterion_group!(benches, full_sort_benchmark, single_step_benchmark);
criterion_main!(benches);
