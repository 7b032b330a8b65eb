//! Append-only chord registry and cycle catalog.
//!
//! Both are arenas addressed by stable ids. Entries are never removed; the
//! search only toggles their `in_graph` flags, so every id handed out stays
//! valid for the engine's lifetime and backtracking is O(1) per entry.

use std::collections::HashMap;

use tracing::trace;

use super::split::split_cycle;
use super::types::{ChordEdge, ChordId, Cycle, CycleId, CycleKey};
use crate::graph::{Edge, Node};

/// Candidate chords, deduplicated by unordered endpoint pair.
#[derive(Debug, Default)]
pub struct ChordRegistry {
    entries: Vec<ChordEdge>,
    by_endpoints: HashMap<Edge, ChordId>,
}

impl ChordRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the chord `uv`, creating it (excluded) on first sight.
    pub fn register_or_lookup(&mut self, u: Node, v: Node) -> ChordId {
        let key = (u.min(v), u.max(v));
        if let Some(&id) = self.by_endpoints.get(&key) {
            return id;
        }
        let id = ChordId(self.entries.len());
        self.entries.push(ChordEdge {
            id,
            u,
            v,
            in_graph: false,
            cycle_ids: Default::default(),
            induced_cycle_ids: Vec::new(),
        });
        self.by_endpoints.insert(key, id);
        trace!(chord = id.0, u, v, "register chord");
        id
    }

    pub fn add_cycle_membership(&mut self, chord: ChordId, cycle: CycleId) {
        self.entries[chord.0].cycle_ids.insert(cycle);
    }

    pub fn remove_cycle_membership(&mut self, chord: ChordId, cycle: CycleId) {
        self.entries[chord.0].cycle_ids.remove(&cycle);
    }

    #[inline]
    pub fn get_endpoints(&self, chord: ChordId) -> (Node, Node) {
        let e = &self.entries[chord.0];
        (e.u, e.v)
    }

    pub fn lookup(&self, u: Node, v: Node) -> Option<ChordId> {
        self.by_endpoints.get(&(u.min(v), u.max(v))).copied()
    }

    #[inline]
    pub fn get(&self, chord: ChordId) -> &ChordEdge {
        &self.entries[chord.0]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, chord: ChordId) -> &mut ChordEdge {
        &mut self.entries[chord.0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChordEdge> {
        self.entries.iter()
    }
}

/// Chordless cycles seen so far, deduplicated by [`CycleKey`].
#[derive(Debug, Default)]
pub struct CycleCatalog {
    entries: Vec<Cycle>,
    by_key: HashMap<CycleKey, CycleId>,
}

impl CycleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `nodes` (any rotation or direction). New cycles start active.
    pub fn register_cycle(&mut self, nodes: &[Node]) -> (CycleId, bool) {
        let key = CycleKey::canonical(nodes);
        if let Some(&id) = self.by_key.get(&key) {
            return (id, false);
        }
        let id = CycleId(self.entries.len());
        self.entries.push(Cycle {
            id,
            nodes: key.nodes().to_vec(),
            chord_ids: Default::default(),
            in_graph: true,
            subcycles: Default::default(),
        });
        trace!(cycle = id.0, nodes = ?key.nodes(), "register cycle");
        self.by_key.insert(key, id);
        (id, true)
    }

    pub fn add_chord_membership(&mut self, cycle: CycleId, chord: ChordId) {
        self.entries[cycle.0].chord_ids.insert(chord);
    }

    /// Register every non-consecutive node pair of `cycle` as a chord and
    /// cross-link both sides. Idempotent.
    pub fn discover_chords(&mut self, cycle: CycleId, chords: &mut ChordRegistry) {
        let nodes = self.entries[cycle.0].nodes.clone();
        let n = nodes.len();
        for i in 0..n {
            for j in i + 2..n {
                if i == 0 && j == n - 1 {
                    break;
                }
                let chord = chords.register_or_lookup(nodes[i], nodes[j]);
                chords.add_cycle_membership(chord, cycle);
                self.add_chord_membership(cycle, chord);
            }
        }
    }

    /// Drop all chord cross-links of `cycle` (both sides).
    pub fn unlink_chords(&mut self, cycle: CycleId, chords: &mut ChordRegistry) {
        let linked = std::mem::take(&mut self.entries[cycle.0].chord_ids);
        for chord in linked {
            chords.remove_cycle_membership(chord, cycle);
        }
    }

    /// Sub-cycles of `cycle` split by `chord`, computed at most once per pair.
    ///
    /// On a miss the split is computed, triangles are dropped, new sub-cycles
    /// are registered (active) with their chords discovered, and the result is
    /// memoized. A hit returns the memo without touching any state.
    pub fn get_or_compute_subcycles(
        &mut self,
        cycle: CycleId,
        chord: ChordId,
        chords: &mut ChordRegistry,
    ) -> Vec<CycleId> {
        if let Some(ids) = self.entries[cycle.0].subcycles.get(&chord) {
            return ids.clone();
        }
        let (u, v) = chords.get_endpoints(chord);
        let arcs = split_cycle(&self.entries[cycle.0].nodes, u, v).unwrap_or_default();
        let mut ids = Vec::with_capacity(2);
        for arc in arcs.iter().filter(|arc| arc.len() > 3) {
            let (id, is_new) = self.register_cycle(arc);
            if is_new {
                self.discover_chords(id, chords);
            }
            ids.push(id);
        }
        trace!(cycle = cycle.0, chord = chord.0, subcycles = ?ids, "split computed");
        self.entries[cycle.0].subcycles.insert(chord, ids.clone());
        ids
    }

    #[inline]
    pub fn get(&self, cycle: CycleId) -> &Cycle {
        &self.entries[cycle.0]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, cycle: CycleId) -> &mut Cycle {
        &mut self.entries[cycle.0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cycle> {
        self.entries.iter()
    }
}
