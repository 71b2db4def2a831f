use catenc_ordinal::{OneHotEncoder, OrdinalEncoder};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array1;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::sync::Arc;
use std::thread;

fn categories(rng: &mut SmallRng, size: usize, cardinality: usize) -> Vec<String> {
    (0..size)
        .map(|_| format!("category-{}", rng.gen_range(0..cardinality)))
        .collect()
}

fn ordinal_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut group = c.benchmark_group("ordinal_encode");
    group.sample_size(20);

    for cardinality in [10, 1_000, 100_000] {
        let values = categories(&mut rng, 100_000, cardinality);
        group.bench_with_input(
            BenchmarkId::from_parameter(cardinality),
            &values,
            |b, values| {
                b.iter(|| {
                    let encoder = OrdinalEncoder::new(false);
                    encoder.encode_batch(values)
                })
            },
        );
    }

    group.finish();
}

fn concurrent_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let values = Arc::new(categories(&mut rng, 50_000, 5_000));
    let mut group = c.benchmark_group("ordinal_concurrent_encode");
    group.sample_size(10);

    for nthreads in [1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(nthreads),
            &nthreads,
            |b, &nthreads| {
                b.iter(|| {
                    let encoder = Arc::new(OrdinalEncoder::new(false));
                    let handles: Vec<_> = (0..nthreads)
                        .map(|_| {
                            let encoder = Arc::clone(&encoder);
                            let values = Arc::clone(&values);
                            thread::spawn(move || {
                                values.iter().map(|v| encoder.encode(v)).sum::<usize>()
                            })
                        })
                        .collect();
                    handles
                        .into_iter()
                        .map(|h| h.join().unwrap())
                        .sum::<usize>()
                })
            },
        );
    }

    group.finish();
}

fn one_hot_bench(c: &mut Criterion) {
    use catenc::traits::Transformer;

    let mut rng = SmallRng::seed_from_u64(42);
    let mut group = c.benchmark_group("one_hot_transform");
    group.sample_size(20);

    for cardinality in [10, 100, 1_000] {
        let values = Array1::from(categories(&mut rng, 10_000, cardinality));
        group.bench_with_input(
            BenchmarkId::from_parameter(cardinality),
            &values,
            |b, values| {
                b.iter(|| {
                    let encoder = OneHotEncoder::new(false);
                    encoder.transform(values)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, ordinal_bench, concurrent_bench, one_hot_bench);
criterion_main!(benches);
