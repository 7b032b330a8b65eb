//! Result record shared by the exact engine and the elimination game.

use crate::graph::{Edge, Graph};

/// Triangulation of an input graph plus summary statistics over repetitions.
///
/// Deterministic algorithms report `mean == size`, `variance == 0`, `repetitions == 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangulationResult {
    /// Input graph plus `fill_edges`.
    pub triangulated: Graph,
    /// Added edges as `(min, max)` pairs, in the order the algorithm produced them.
    pub fill_edges: Vec<Edge>,
    pub size: usize,
    pub mean: f64,
    /// Population variance of the fill sizes over all repetitions.
    pub variance: f64,
    pub repetitions: usize,
}

impl TriangulationResult {
    /// Record for a single deterministic run.
    pub fn single(graph: &Graph, fill_edges: Vec<Edge>) -> Self {
        let size = fill_edges.len();
        Self {
            triangulated: graph.with_added_edges(&fill_edges),
            fill_edges,
            size,
            mean: size as f64,
            variance: 0.0,
            repetitions: 1,
        }
    }

    /// Record for the best of several runs; `sizes` holds every run's fill size.
    pub fn best_of(graph: &Graph, fill_edges: Vec<Edge>, sizes: &[usize]) -> Self {
        let (mean, variance) = mean_and_variance(sizes);
        let mut out = Self::single(graph, fill_edges);
        out.mean = mean;
        out.variance = variance;
        out.repetitions = sizes.len();
        out
    }
}

/// Mean and population variance; `(0, 0)` for an empty slice.
pub fn mean_and_variance(xs: &[usize]) -> (f64, f64) {
    if xs.is_empty() {
        return (0.0, 0.0);
    }
    let n = xs.len() as f64;
    let mean = xs.iter().map(|&x| x as f64).sum::<f64>() / n;
    let var = xs.iter().map(|&x| (x as f64 - mean).powi(2)).sum::<f64>() / n;
    (mean, var)
}
