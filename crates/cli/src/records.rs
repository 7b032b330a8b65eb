//! Experiment records: one JSON object per (algorithm, input) run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mintri::api::{TriangulationError, TriangulationResult};
use serde::{Deserialize, Serialize};

/// Output value written for failed runs (time limit, cycle too large).
pub const FAILED_OUTPUT: i64 = -1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub algo: String,
    /// Fill size, or [`FAILED_OUTPUT`].
    pub output: i64,
    /// Wall time in seconds.
    pub running_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timelimit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<usize>,
    /// Graph-reduction preprocessing flag. Kept when reading older records;
    /// this runner applies no reduction and leaves it unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce_graph: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExperimentRecord {
    pub fn from_outcome(
        input: String,
        algo: String,
        outcome: &Result<TriangulationResult, TriangulationError>,
        running_time: f64,
    ) -> Self {
        let (output, error) = match outcome {
            Ok(res) => (res.size as i64, None),
            Err(e) => (FAILED_OUTPUT, Some(e.to_string())),
        };
        Self {
            input,
            algo,
            output,
            running_time,
            timelimit: None,
            randomized: None,
            repetitions: None,
            reduce_graph: None,
            mean: None,
            variance: None,
            error,
        }
    }

    pub fn failed(&self) -> bool {
        self.output < 0
    }
}

pub fn write_records(path: &Path, records: &[ExperimentRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(records)?)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn read_records(path: &Path) -> Result<Vec<ExperimentRecord>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing records in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintri::api::Graph;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn failures_are_recorded_as_minus_one() {
        let err = Err(TriangulationError::TimeLimitExceeded {
            limit: Duration::from_secs(1),
        });
        let rec = ExperimentRecord::from_outcome("g.json".into(), "mt".into(), &err, 1.2);
        assert_eq!(rec.output, FAILED_OUTPUT);
        assert!(rec.failed());
        assert!(rec.error.unwrap().contains("time limit"));
    }

    #[test]
    fn optional_fields_are_omitted_and_defaulted() {
        let ok = Ok(TriangulationResult::single(&Graph::cycle(4), vec![(0, 2)]));
        let rec = ExperimentRecord::from_outcome("c4".into(), "eg".into(), &ok, 0.5);
        let text = serde_json::to_string(&rec).unwrap();
        assert!(!text.contains("timelimit"));
        assert!(!text.contains("error"));

        // Bare records (only output and running_time) still load.
        let bare: ExperimentRecord =
            serde_json::from_str(r#"{"output": 3, "running_time": 0.25}"#).unwrap();
        assert_eq!(bare.output, 3);
        assert!(bare.algo.is_empty());
        let older: ExperimentRecord = serde_json::from_str(
            r#"{"output": -1, "running_time": 60.0, "timelimit": 60, "reduce_graph": true}"#,
        )
        .unwrap();
        assert!(older.failed());
        assert_eq!(older.reduce_graph, Some(true));
        assert_eq!(older.timelimit, Some(60.0));
    }

    #[test]
    fn write_then_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/results.json");
        let ok = Ok(TriangulationResult::single(&Graph::cycle(5), vec![(0, 2), (0, 3)]));
        let mut rec = ExperimentRecord::from_outcome("c5".into(), "eg".into(), &ok, 0.1);
        rec.randomized = Some(false);
        write_records(&path, &[rec.clone()]).unwrap();
        assert_eq!(read_records(&path).unwrap(), vec![rec]);
    }
}
