//! Elimination game: a fast (not minimum) triangulation heuristic.
//!
//! Purpose
//! - Produce an upper bound on the minimum fill-in and a baseline to compare
//!   the exact engine against.
//!
//! Model
//! - Visit nodes in a given order. Each visited node turns its remaining
//!   neighbourhood into a clique (the added edges are the fill) and is then
//!   removed. Any order yields a triangulation; a perfect elimination order
//!   yields none.
//! - The randomized variant repeats the game with fresh shuffles drawn from a
//!   single seeded `StdRng` and keeps the first smallest fill.

use std::collections::BTreeSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::deadline::Deadline;
use crate::error::TriangulationError;
use crate::graph::{maximum_cardinality_order, Edge, Graph, Node};
use crate::result::TriangulationResult;

/// How `triangulate_elimination_game` orders the nodes.
///
/// Arbitrary orders go straight to [`elimination_game`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EliminationOrder {
    /// Ascending node ids.
    #[default]
    Natural,
    /// Reverse maximum cardinality search order; fill-free on chordal graphs.
    MaximumCardinality,
    /// Seeded shuffles, best of `repetitions`.
    Randomized,
}

/// Elimination game configuration.
#[derive(Clone, Copy, Debug)]
pub struct EliminationCfg {
    pub order: EliminationOrder,
    /// Runs for `Randomized` (values below 1 count as 1). Ignored otherwise.
    pub repetitions: usize,
    pub seed: u64,
    /// One time limit for all repetitions together.
    pub time_limit: Option<Duration>,
}

impl Default for EliminationCfg {
    fn default() -> Self {
        Self {
            order: EliminationOrder::Natural,
            repetitions: 1,
            seed: 0,
            time_limit: None,
        }
    }
}

/// Play the elimination game on `graph` in `order`; returns the fill edges as
/// `(min, max)` pairs in the order they were added.
///
/// Order entries that are not nodes of `graph` (or repeat) are ignored; nodes
/// missing from `order` are eliminated afterwards in ascending order. The
/// deadline is polled once per eliminated node.
pub fn elimination_game(
    graph: &Graph,
    order: &[Node],
    deadline: Option<&Deadline>,
) -> Result<Vec<Edge>, TriangulationError> {
    let listed: BTreeSet<Node> = order.iter().copied().collect();
    let rest: Vec<Node> = graph.nodes().filter(|v| !listed.contains(v)).collect();

    let mut g = graph.clone();
    let mut fill = Vec::new();
    for &v in order.iter().chain(&rest) {
        if !g.contains_node(v) {
            continue;
        }
        if let Some(deadline) = deadline {
            deadline.check()?;
        }
        // Ascending, so every pair below comes out as (min, max).
        let nbrs: Vec<Node> = g.neighbors(v).collect();
        for (i, &a) in nbrs.iter().enumerate() {
            for &b in &nbrs[i + 1..] {
                if g.add_edge(a, b) {
                    fill.push((a, b));
                }
            }
        }
        g.remove_node(v);
    }
    Ok(fill)
}

/// Triangulate with the elimination game as configured.
///
/// Single-order runs report `mean == size` and `variance == 0`; randomized
/// runs report the first smallest fill plus mean and population variance over
/// all repetitions.
pub fn triangulate_elimination_game(
    graph: &Graph,
    cfg: EliminationCfg,
) -> Result<TriangulationResult, TriangulationError> {
    let deadline = cfg.time_limit.map(Deadline::starting_now);
    let mut order: Vec<Node> = match cfg.order {
        EliminationOrder::MaximumCardinality => {
            let mut mcs = maximum_cardinality_order(graph);
            mcs.reverse();
            mcs
        }
        EliminationOrder::Natural | EliminationOrder::Randomized => graph.nodes().collect(),
    };

    if cfg.order != EliminationOrder::Randomized {
        let fill = elimination_game(graph, &order, deadline.as_ref())?;
        info!(order = ?cfg.order, size = fill.len(), "elimination game finished");
        return Ok(TriangulationResult::single(graph, fill));
    }

    let repetitions = cfg.repetitions.max(1);
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut best: Option<Vec<Edge>> = None;
    let mut sizes = Vec::with_capacity(repetitions);
    for rep in 0..repetitions {
        order.shuffle(&mut rng);
        let fill = elimination_game(graph, &order, deadline.as_ref())?;
        debug!(rep, size = fill.len(), "randomized elimination run");
        sizes.push(fill.len());
        if best.as_ref().map_or(true, |b| fill.len() < b.len()) {
            best = Some(fill);
        }
    }
    let res = TriangulationResult::best_of(graph, best.unwrap_or_default(), &sizes);
    info!(
        size = res.size,
        mean = res.mean,
        variance = res.variance,
        repetitions,
        "randomized elimination game finished"
    );
    Ok(res)
}
