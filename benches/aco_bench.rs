//! Criterion benchmarks for the rake allocation colony.
//!
//! Uses a synthetic corridor network with rakes and trains spread evenly
//! along it to measure pure algorithm overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rake_aco::aco::{AcoConfig, AcoRunner, SelectionRule};
use rake_aco::fleet::{Rake, Train};
use rake_aco::network::Route;

// ===========================================================================
// Synthetic corridor
// ===========================================================================

fn corridor(stations: usize) -> Vec<Route> {
    let names: Vec<String> = (0..stations).map(|i| format!("S{i}")).collect();
    let half = stations / 2;
    vec![
        Route::new("main", names.clone(), stations as f64 * 50.0),
        Route::new(
            "branch",
            names[half..].iter().rev().cloned(),
            half as f64 * 40.0,
        ),
    ]
}

fn fleet(rakes: usize, trains: usize, stations: usize) -> (Vec<Rake>, Vec<Train>) {
    let rakes = (0..rakes)
        .map(|i| {
            Rake::new(format!("r{i}"), format!("S{}", (i * 7) % stations)).with_loaded(i % 3 == 0)
        })
        .collect();
    let trains = (0..trains)
        .map(|i| Train::new(format!("t{i}"), format!("S{}", (i * 5 + 1) % stations)))
        .collect();
    (rakes, trains)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_colony(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_colony");
    group.sample_size(10);

    for (rakes, trains, stations) in [(10usize, 8usize, 12usize), (50, 40, 30), (200, 150, 60)] {
        let routes = corridor(stations);
        let (rakes_v, trains_v) = fleet(rakes, trains, stations);
        let config = AcoConfig::default().with_iterations(20).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("r{}_t{}_s{}", rakes, trains, stations), rakes),
            &(rakes_v, trains_v, routes, config),
            |b, (r, t, routes, cfg)| {
                b.iter(|| {
                    let result = AcoRunner::run(black_box(r), black_box(t), routes, cfg);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_roulette(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_roulette");
    group.sample_size(10);

    for &rakes in &[10usize, 50, 200] {
        let routes = corridor(30);
        let (rakes_v, trains_v) = fleet(rakes, rakes * 3 / 4, 30);
        let config = AcoConfig::default()
            .with_iterations(20)
            .with_selection(SelectionRule::Roulette)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(rakes),
            &(rakes_v, trains_v, routes, config),
            |b, (r, t, routes, cfg)| {
                b.iter(|| {
                    let result = AcoRunner::run(black_box(r), black_box(t), routes, cfg);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_colony, bench_roulette);
criterion_main!(benches);
