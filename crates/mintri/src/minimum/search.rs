//! Branch-and-bound search over chord inclusions with an explicit decision stack.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::catalog::{ChordRegistry, CycleCatalog};
use super::types::{ChordId, CycleId, Decision, SearchCfg, SearchStats};
use crate::deadline::Deadline;
use crate::error::TriangulationError;
use crate::graph::{Edge, Graph};
use crate::result::TriangulationResult;

/// Minimum triangulation of `graph` as a graph (input plus fill edges).
pub fn find_minimum_triangulation(graph: &Graph) -> Result<Graph, TriangulationError> {
    Ok(triangulate_minimum(graph, SearchCfg::default())?.triangulated)
}

/// Size of a minimum fill-in of `graph`.
pub fn minimum_triangulation_size(graph: &Graph) -> Result<usize, TriangulationError> {
    Ok(triangulate_minimum(graph, SearchCfg::default())?.size)
}

/// Run the exact search and package the outcome as a result record.
pub fn triangulate_minimum(
    graph: &Graph,
    cfg: SearchCfg,
) -> Result<TriangulationResult, TriangulationError> {
    let mut search = MinimumTriangulation::new(graph, cfg);
    search.run()?;
    Ok(TriangulationResult::single(graph, search.fill_edges()))
}

/// Exact minimum-triangulation engine.
///
/// The working graph is never stored: it is the input graph plus the chords
/// flagged `in_graph`. The engine owns both catalogs; they only grow.
///
/// After `run` returns, the live flags describe whatever branch was explored
/// last. Read the result through [`fill_edges`](Self::fill_edges).
pub struct MinimumTriangulation<'g> {
    graph: &'g Graph,
    cfg: SearchCfg,
    chords: ChordRegistry,
    cycles: CycleCatalog,
    /// Number of active cycles, i.e. chordless cycles (length ≥ 4) of the working graph.
    active_noncomplex_cycles: usize,
    /// Active cycle length -> number of active cycles with that length.
    active_lengths: BTreeMap<usize, usize>,
    stack: Vec<Decision>,
    cursor: usize,
    best: Option<Vec<ChordId>>,
    stats: SearchStats,
    deadline: Option<Deadline>,
}

impl<'g> MinimumTriangulation<'g> {
    pub fn new(graph: &'g Graph, cfg: SearchCfg) -> Self {
        Self {
            graph,
            cfg,
            chords: ChordRegistry::new(),
            cycles: CycleCatalog::new(),
            active_noncomplex_cycles: 0,
            active_lengths: BTreeMap::new(),
            stack: Vec::new(),
            cursor: 0,
            best: None,
            stats: SearchStats::default(),
            deadline: None,
        }
    }

    /// Search until every branch is explored (or the time limit hits).
    pub fn run(&mut self) -> Result<(), TriangulationError> {
        self.deadline = self.cfg.time_limit.map(Deadline::starting_now);
        if !self.initialize()? {
            debug!("graph is a forest or already chordal; nothing to search");
            return Ok(());
        }
        loop {
            self.stats.iterations += 1;
            if let Some(deadline) = &self.deadline {
                deadline.check()?;
            }
            let next = if self.bound_exceeded() {
                self.stats.pruned += 1;
                None
            } else {
                self.next_chord(self.cursor)
            };
            match next {
                Some(chord) => {
                    self.cursor = chord.0;
                    self.include(chord);
                    if self.active_noncomplex_cycles == 0 {
                        self.record_completion();
                    }
                }
                None => match self.exclude_last() {
                    Some(chord) => self.cursor = chord.0 + 1,
                    None => break,
                },
            }
        }
        info!(
            size = self.best.as_ref().map_or(0, Vec::len),
            chords = self.chords.len(),
            cycles = self.cycles.len(),
            iterations = self.stats.iterations,
            pruned = self.stats.pruned,
            "minimum triangulation search finished"
        );
        Ok(())
    }

    /// Register the input's chordless cycles and their chords.
    ///
    /// Returns `false` when there is nothing to search (forest or chordal graph).
    pub(crate) fn initialize(&mut self) -> Result<bool, TriangulationError> {
        if self.graph.cycle_basis().is_empty() || self.graph.is_chordal() {
            return Ok(false);
        }
        let found = self.graph.chordless_cycles();
        if let Some(len) = found
            .iter()
            .map(Vec::len)
            .max()
            .filter(|&len| len > self.cfg.max_cycle_len)
        {
            return Err(TriangulationError::CycleTooLarge {
                len,
                limit: self.cfg.max_cycle_len,
            });
        }
        for nodes in &found {
            let (id, is_new) = self.cycles.register_cycle(nodes);
            if is_new {
                self.count_active(id);
                self.cycles.discover_chords(id, &mut self.chords);
            }
        }
        debug!(
            cycles = self.cycles.len(),
            chords = self.chords.len(),
            "catalogs initialized"
        );
        Ok(self.active_noncomplex_cycles > 0)
    }

    /// First chord at or after `from` that is excluded and splits an active cycle.
    pub(crate) fn next_chord(&self, from: usize) -> Option<ChordId> {
        (from..self.chords.len()).map(ChordId).find(|&c| {
            let chord = self.chords.get(c);
            !chord.in_graph
                && chord
                    .cycle_ids
                    .iter()
                    .any(|&cy| self.cycles.get(cy).in_graph)
        })
    }

    /// Forward step: include `chord`, split every active cycle it cuts, and
    /// activate the chordless cycles that only exist because of it.
    pub(crate) fn include(&mut self, chord: ChordId) {
        self.stats.forward_steps += 1;
        let to_split: Vec<CycleId> = self
            .chords
            .get(chord)
            .cycle_ids
            .iter()
            .copied()
            .filter(|&c| self.cycles.get(c).in_graph)
            .collect();

        let mut activated = Vec::new();
        for &parent in &to_split {
            if !self.cycles.get(parent).subcycles.contains_key(&chord) {
                self.stats.splits_computed += 1;
            }
            let fresh_from = self.cycles.len();
            let subs = self
                .cycles
                .get_or_compute_subcycles(parent, chord, &mut self.chords);
            self.deactivate(parent);
            for sub in subs {
                // Freshly registered cycles start active but are not counted yet.
                if sub.0 >= fresh_from {
                    self.count_active(sub);
                    activated.push(sub);
                } else if self.activate(sub) {
                    activated.push(sub);
                }
            }
        }
        self.chords.get_mut(chord).in_graph = true;

        let (u, v) = self.chords.get_endpoints(chord);
        let working = self.graph.with_added_edges(&self.included_edges(chord));
        for nodes in working.chordless_cycles_through(u, v) {
            let (id, is_new) = self.cycles.register_cycle(&nodes);
            if is_new {
                self.count_active(id);
                self.cycles.discover_chords(id, &mut self.chords);
            } else if !self.activate(id) {
                continue;
            }
            activated.push(id);
            self.chords.get_mut(chord).induced_cycle_ids.push(id);
        }

        debug!(
            chord = chord.0,
            u,
            v,
            split = to_split.len(),
            activated = activated.len(),
            active = self.active_noncomplex_cycles,
            depth = self.stack.len() + 1,
            "include chord"
        );
        self.stack.push(Decision {
            chord,
            split: to_split,
            activated,
        });
    }

    /// Backward step: undo the most recent inclusion. Returns the chord that was removed.
    pub(crate) fn exclude_last(&mut self) -> Option<ChordId> {
        let decision = self.stack.pop()?;
        self.stats.backward_steps += 1;
        for &c in &decision.activated {
            self.deactivate(c);
        }
        for &parent in &decision.split {
            self.activate(parent);
        }
        let induced = std::mem::take(&mut self.chords.get_mut(decision.chord).induced_cycle_ids);
        for c in induced {
            self.cycles.unlink_chords(c, &mut self.chords);
        }
        self.chords.get_mut(decision.chord).in_graph = false;
        debug!(
            chord = decision.chord.0,
            active = self.active_noncomplex_cycles,
            depth = self.stack.len(),
            "exclude chord"
        );
        Some(decision.chord)
    }

    fn activate(&mut self, cycle: CycleId) -> bool {
        if self.cycles.get(cycle).in_graph {
            return false;
        }
        self.cycles.get_mut(cycle).in_graph = true;
        self.count_active(cycle);
        // Discarded induced cycles lost their chord links; restore them.
        if self.cycles.get(cycle).chord_ids.is_empty() {
            self.cycles.discover_chords(cycle, &mut self.chords);
        }
        true
    }

    fn deactivate(&mut self, cycle: CycleId) -> bool {
        if !self.cycles.get(cycle).in_graph {
            return false;
        }
        self.cycles.get_mut(cycle).in_graph = false;
        self.active_noncomplex_cycles -= 1;
        let len = self.cycles.get(cycle).len();
        if let Some(n) = self.active_lengths.get_mut(&len) {
            *n -= 1;
            if *n == 0 {
                self.active_lengths.remove(&len);
            }
        }
        true
    }

    /// Count an active cycle whose flag is already set.
    fn count_active(&mut self, cycle: CycleId) {
        self.active_noncomplex_cycles += 1;
        *self
            .active_lengths
            .entry(self.cycles.get(cycle).len())
            .or_default() += 1;
    }

    /// Node count of the longest active cycle.
    pub(crate) fn longest_active_cycle(&self) -> Option<usize> {
        self.active_lengths.keys().next_back().copied()
    }

    fn record_completion(&mut self) {
        self.stats.completions += 1;
        let size = self.stack.len();
        if self.best.as_ref().map_or(true, |best| size < best.len()) {
            debug!(size, "new minimum triangulation");
            self.best = Some(self.stack.iter().map(|d| d.chord).collect());
        }
    }

    /// True if no completion below the current node can beat the incumbent.
    fn bound_exceeded(&self) -> bool {
        if !self.cfg.prune_with_bounds || self.active_noncomplex_cycles == 0 {
            return false;
        }
        let Some(best) = &self.best else {
            return false;
        };
        // Every active chordless k-cycle still needs k - 3 chords of its own.
        let needed = self.longest_active_cycle().map_or(1, |len| len - 3);
        self.stack.len() + needed >= best.len()
    }

    /// Chords on the stack plus `pending`, in inclusion order.
    fn included_edges(&self, pending: ChordId) -> Vec<Edge> {
        self.stack
            .iter()
            .map(|d| d.chord)
            .chain(std::iter::once(pending))
            .map(|c| self.chord_edge(c))
            .collect()
    }

    fn chord_edge(&self, chord: ChordId) -> Edge {
        let (u, v) = self.chords.get_endpoints(chord);
        (u.min(v), u.max(v))
    }

    /// Best fill found, as `(min, max)` pairs in inclusion order. Empty before `run`.
    pub fn fill_edges(&self) -> Vec<Edge> {
        self.best
            .iter()
            .flatten()
            .map(|&c| self.chord_edge(c))
            .collect()
    }

    /// Input graph plus the best fill.
    pub fn triangulated(&self) -> Graph {
        self.graph.with_added_edges(&self.fill_edges())
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn active_noncomplex_cycles(&self) -> usize {
        self.active_noncomplex_cycles
    }

    pub fn chords(&self) -> &ChordRegistry {
        &self.chords
    }

    pub fn cycles(&self) -> &CycleCatalog {
        &self.cycles
    }
}
