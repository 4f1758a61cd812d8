use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mamdani_core::config::EngineConfig;
use mamdani_core::DefuzzMethod;
use mamdani_engine::presets::depression_risk_system;

fn sample_inputs(n: usize) -> Vec<[(&'static str, f64); 4]> {
    (0..n)
        .map(|i| {
            let t = (i % 11) as f64;
            [
                ("mood", t),
                ("energy", 10.0 - t),
                ("appetite", t - 5.0),
                ("social", (t * 7.0) % 11.0),
            ]
        })
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let system = depression_risk_system().unwrap();
    let inputs = [("mood", 2.0), ("energy", 3.0), ("appetite", -2.0), ("social", 4.0)];

    c.bench_function("compute_depression_risk", |b| {
        b.iter(|| system.compute(black_box(&inputs)).unwrap());
    });
}

fn bench_defuzz_methods(c: &mut Criterion) {
    let inputs = [("mood", 2.0), ("energy", 3.0), ("appetite", -2.0), ("social", 4.0)];
    let mut group = c.benchmark_group("defuzz_method");
    for method in DefuzzMethod::ALL {
        let system = depression_risk_system().unwrap().with_config(EngineConfig {
            defuzz_method: Some(method),
            ..EngineConfig::default()
        });
        group.bench_function(method.name(), |b| {
            b.iter(|| system.compute(black_box(&inputs)).unwrap());
        });
    }
    group.finish();
}

fn bench_batch_1k(c: &mut Criterion) {
    let system = depression_risk_system().unwrap();
    let batch = sample_inputs(1_000);

    c.bench_function("compute_batch_1k", |b| {
        b.iter(|| system.compute_batch(black_box(&batch)));
    });
}

criterion_group!(benches, bench_compute, bench_defuzz_methods, bench_batch_1k);
criterion_main!(benches);
