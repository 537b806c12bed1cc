//! Criterion benchmarks for crossingbench_core
//!
//! Run with: cargo bench -p crossingbench_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use crossingbench_core::analysis::{CompareConfig, SweepConfig, compare, sweep};
use crossingbench_core::cost::evaluate;
use crossingbench_core::model::CostInputs;
use crossingbench_core::ParameterRegistry;

fn bench_evaluate(c: &mut Criterion) {
    let registry = ParameterRegistry::default();
    let compute = registry.compute("digital").unwrap();
    let boundary = registry.boundary("analog").unwrap();
    let inputs = CostInputs::with_derived_events(262_144, 196_608, 256).unwrap();

    c.bench_function("evaluate", |b| {
        b.iter(|| evaluate(black_box(&compute), black_box(&boundary), black_box(&inputs)))
    });
}

fn bench_sweep(c: &mut Criterion) {
    let registry = ParameterRegistry::default();
    let compute = registry.compute("analog").unwrap();
    let boundary = registry.boundary("analog").unwrap();

    let mut group = c.benchmark_group("sweep");
    for steps in [12, 1_000, 100_000] {
        let config = SweepConfig {
            cross_min: 1,
            cross_max: 1 << 40,
            steps,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(steps), &config, |b, config| {
            b.iter(|| sweep(black_box(&compute), black_box(&boundary), black_box(config)))
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let registry = ParameterRegistry::default();
    let compute = registry.compute("analog").unwrap();
    let boundary = registry.boundary("chiplet").unwrap();
    let config = CompareConfig::default();

    c.bench_function("compare", |b| {
        b.iter(|| compare(black_box(&compute), black_box(&boundary), black_box(&config)))
    });
}

criterion_group!(benches, bench_evaluate, bench_sweep, bench_compare);
criterion_main!(benches);
