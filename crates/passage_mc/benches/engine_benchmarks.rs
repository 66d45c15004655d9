//! Criterion benchmarks for the first-passage engine.
//!
//! Measures single-trial stepping cost and full-run throughput at resetting
//! rates around the optimum to characterise the hot loop.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use passage_core::types::SimulationParameters;
use passage_mc::mc::{run_trial, EngineConfig, MonteCarloEngine, StepKernel};
use passage_mc::rng::SimRng;

fn bench_params(rate: f64) -> SimulationParameters {
    SimulationParameters {
        reset_rate_positive: rate,
        reset_rate_negative: rate,
        target_probability: 0.5,
        diffusion_constant: 1.0,
        target_distance: 1.0,
        time_step: 1e-4,
        ..SimulationParameters::default()
    }
}

/// Benchmark a single trial at several resetting rates.
fn bench_single_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_trial");

    for rate in [1.0, 2.5, 8.0] {
        let kernel = StepKernel::new(&bench_params(rate));
        group.bench_with_input(BenchmarkId::new("run_trial", rate), &kernel, |b, kernel| {
            let mut rng = SimRng::from_seed(42);
            b.iter(|| run_trial(black_box(kernel), &mut rng));
        });
    }

    group.finish();
}

/// Benchmark a full engine run of 100 trials.
fn bench_engine_run(c: &mut Criterion) {
    let params = bench_params(2.5);

    c.bench_function("engine_run_100", |b| {
        b.iter(|| {
            let config = EngineConfig::builder()
                .trial_count(100)
                .seed(42)
                .build()
                .unwrap();
            let mut engine = MonteCarloEngine::new(config).unwrap();
            engine.run(black_box(&params)).unwrap()
        });
    });
}

criterion_group!(benches, bench_single_trial, bench_engine_run);
criterion_main!(benches);
