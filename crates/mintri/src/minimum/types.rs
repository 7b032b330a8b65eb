//! Chord and cycle records shared by `catalog` and `search`, plus the search knobs.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use crate::cfg::MAX_CYCLE_LEN;
use crate::graph::Node;

/// Arena indices; never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChordId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleId(pub usize);

/// Candidate non-edge; one per unordered endpoint pair.
#[derive(Clone, Debug)]
pub struct ChordEdge {
    pub id: ChordId,
    pub u: Node,
    pub v: Node,
    /// Tentatively included in the current candidate triangulation.
    pub in_graph: bool,
    /// Cycles this chord would split.
    pub cycle_ids: BTreeSet<CycleId>,
    /// Cycles that became active only because this chord was included.
    pub induced_cycle_ids: Vec<CycleId>,
}

/// Chordless cycle of length ≥ 4, stored in canonical order.
#[derive(Clone, Debug)]
pub struct Cycle {
    pub id: CycleId,
    pub nodes: Vec<Node>,
    pub chord_ids: BTreeSet<ChordId>,
    /// Active: unsplit and chordless in the tentative graph.
    pub in_graph: bool,
    /// Memoized splits: chord → sub-cycles with more than three nodes.
    pub subcycles: BTreeMap<ChordId, Vec<CycleId>>,
}

impl Cycle {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Structural identity of a cycle: the node sequence rotated to its smallest
/// node and oriented so that the second node is smaller than the last.
///
/// Two traversals of the same cycle (any start, either direction) map to the same key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleKey(Vec<Node>);

impl CycleKey {
    pub fn canonical(nodes: &[Node]) -> Self {
        let n = nodes.len();
        let Some(start) = (0..n).min_by_key(|&i| nodes[i]) else {
            return Self(Vec::new());
        };
        let next = nodes[(start + 1) % n];
        let prev = nodes[(start + n - 1) % n];
        let seq = if next <= prev {
            (0..n).map(|k| nodes[(start + k) % n]).collect()
        } else {
            (0..n).map(|k| nodes[(start + n - k) % n]).collect()
        };
        Self(seq)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.0
    }
}

/// One forward step on the decision stack.
#[derive(Clone, Debug)]
pub(crate) struct Decision {
    pub chord: ChordId,
    /// Parents deactivated by the split.
    pub split: Vec<CycleId>,
    /// Cycles this step switched on (sub-cycles and induced cycles).
    pub activated: Vec<CycleId>,
}

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Longest chordless input cycle accepted before the search starts.
    pub max_cycle_len: usize,
    /// Cut branches that cannot beat the incumbent. Uses the fact that a
    /// chordless k-cycle needs at least k − 3 more chords. Does not change the
    /// returned set, only how much of the tree is visited.
    pub prune_with_bounds: bool,
    /// Abort with `TimeLimitExceeded` once this much wall time has passed.
    /// `None` runs to completion.
    pub time_limit: Option<Duration>,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            max_cycle_len: MAX_CYCLE_LEN,
            prune_with_bounds: true,
            time_limit: None,
        }
    }
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Main-loop iterations (0 if the search returned during initialization).
    pub iterations: u64,
    pub forward_steps: u64,
    pub backward_steps: u64,
    /// Chordal completions reached (not only improving ones).
    pub completions: u64,
    pub pruned: u64,
    /// Fresh split computations (memo misses).
    pub splits_computed: u64,
}
