//! Relative performance of several algorithms over the same inputs.
//!
//! Per input, algorithms are ranked by the chosen axis (smaller is better).
//! Equal values share a rank and the next distinct value gets the next rank
//! (1, 1, 2, ...). Failed runs are pushed behind every success by
//! [`FAILURE_PENALTY`].

use std::collections::BTreeMap;

use clap::ValueEnum;
use mintri::api::mean_and_variance;
use serde::Serialize;

use crate::records::ExperimentRecord;

pub const FAILURE_PENALTY: f64 = 1_000_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Fill size.
    Output,
    /// Running time.
    Time,
}

pub fn axis_value(rec: &ExperimentRecord, axis: Axis) -> f64 {
    let raw = match axis {
        Axis::Output => rec.output as f64,
        Axis::Time => rec.running_time,
    };
    if rec.failed() {
        raw + FAILURE_PENALTY
    } else {
        raw
    }
}

/// Rank lists per algorithm; entry `i` is the rank on input `i`.
///
/// Only the first `min(len)` inputs are ranked.
pub fn relative_performance(values: &BTreeMap<String, Vec<f64>>) -> BTreeMap<String, Vec<usize>> {
    let n = values.values().map(Vec::len).min().unwrap_or(0);
    let mut ranks: BTreeMap<String, Vec<usize>> = values
        .keys()
        .map(|algo| (algo.clone(), Vec::with_capacity(n)))
        .collect();
    for i in 0..n {
        let mut row: Vec<(&String, f64)> = values.iter().map(|(a, v)| (a, v[i])).collect();
        row.sort_by(|x, y| x.1.total_cmp(&y.1));
        let mut rank = 1;
        for (k, &(algo, value)) in row.iter().enumerate() {
            if k > 0 && value > row[k - 1].1 {
                rank += 1;
            }
            if let Some(r) = ranks.get_mut(algo) {
                r.push(rank);
            }
        }
    }
    ranks
}

pub fn mean_relative_performance(values: &BTreeMap<String, Vec<f64>>) -> BTreeMap<String, f64> {
    relative_performance(values)
        .into_iter()
        .map(|(algo, ranks)| (algo, mean_and_variance(&ranks).0))
        .collect()
}
