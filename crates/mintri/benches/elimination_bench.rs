//! Criterion benches for the elimination game.
//!
//! - Natural and MCS orders on grids up to 20x20.
//! - Randomized best-of-k on a 10x10 grid (k = 1, 10, 50).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mintri::api::{triangulate_elimination_game, EliminationCfg, EliminationOrder, Graph};

fn bench_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("elimination/orders");
    for side in [5u32, 10, 20] {
        let g = Graph::grid(side, side);
        for order in [EliminationOrder::Natural, EliminationOrder::MaximumCardinality] {
            let cfg = EliminationCfg {
                order,
                ..EliminationCfg::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{order:?}"), side),
                &g,
                |b, g| b.iter(|| triangulate_elimination_game(g, cfg).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_randomized(c: &mut Criterion) {
    let mut group = c.benchmark_group("elimination/randomized");
    group.sample_size(20);
    let g = Graph::grid(10, 10);
    for repetitions in [1usize, 10, 50] {
        let cfg = EliminationCfg {
            order: EliminationOrder::Randomized,
            repetitions,
            seed: 42,
            time_limit: None,
        };
        group.bench_with_input(BenchmarkId::from_parameter(repetitions), &g, |b, g| {
            b.iter(|| triangulate_elimination_game(g, cfg).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_orders, bench_randomized);
criterion_main!(benches);
