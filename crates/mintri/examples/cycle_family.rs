//! Exact vs. heuristic fill on a few small graph families.
//!
//! Purpose
//! - Quick sanity table: simple cycles (known optimum k − 3), wheels, grids.
//! - Shows how far the natural-order elimination game is from the optimum and
//!   how much work the bound saves.
//!
//! Run: `cargo run --release -p mintri --example cycle_family`

use std::time::Instant;

use mintri::api::{
    triangulate_elimination_game, EliminationCfg, Graph, MinimumTriangulation, SearchCfg,
};

fn wheel(rim: u32) -> Graph {
    let mut g = Graph::cycle(rim);
    for v in 0..rim {
        g.add_edge(rim, v);
    }
    g
}

fn main() {
    let mut family: Vec<(String, Graph)> = (4..=12)
        .map(|k| (format!("C{k}"), Graph::cycle(k)))
        .collect();
    family.extend((5..=8).map(|k| (format!("W{k}"), wheel(k))));
    family.push(("grid 3x3".into(), Graph::grid(3, 3)));
    family.push(("grid 3x4".into(), Graph::grid(3, 4)));

    println!(
        "{:<10} {:>5} {:>5} {:>9} {:>9} {:>8} {:>10}",
        "graph", "exact", "eg", "iters", "pruned", "cycles", "time_ms"
    );
    for (name, g) in &family {
        let t0 = Instant::now();
        let mut search = MinimumTriangulation::new(g, SearchCfg::default());
        search.run().expect("small families stay under the cycle limit");
        let ms = t0.elapsed().as_secs_f64() * 1e3;
        let eg = triangulate_elimination_game(g, EliminationCfg::default())
            .expect("no time limit set");
        let stats = search.stats();
        println!(
            "{:<10} {:>5} {:>5} {:>9} {:>9} {:>8} {:>10.3}",
            name,
            search.fill_edges().len(),
            eg.size,
            stats.iterations,
            stats.pruned,
            search.cycles().len(),
            ms
        );
    }
}
