use criterion::{criterion_group, criterion_main, Criterion};
use oncoforge_core::config::{SearchConfig, TrajectoryConfig};
use oncoforge_core::consts::DEFAULT_EPITOPE_DNA;
use oncoforge_core::scoring::HashImpactScorer;
use oncoforge_core::search::run_search;
use oncoforge_core::seq::parse_dna;
use oncoforge_core::trajectory::{run_trajectory, MutationNoise};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let trajectory_cfg = TrajectoryConfig::builder().days(365).seed("123456789").build();

    c.bench_function("trajectory (365 days)", |b| {
        b.iter(|| run_trajectory(black_box(&trajectory_cfg), &MutationNoise))
    });

    let dna = parse_dna(DEFAULT_EPITOPE_DNA).expect("valid epitope");
    let search_cfg = SearchConfig::builder().iterations(100).seed("42").build();

    c.bench_function("mutation search (100 iterations)", |b| {
        b.iter(|| run_search(black_box(&dna), &HashImpactScorer, black_box(&search_cfg)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
