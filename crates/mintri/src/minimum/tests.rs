//! Engine tests: known families, brute-force cross-checks, and step-level invariants.

use std::collections::BTreeSet;
use std::time::Duration;

use super::*;
use crate::error::TriangulationError;
use crate::graph::{Edge, Graph, Node};

fn wheel(rim: u32) -> Graph {
    let mut g = Graph::cycle(rim);
    for v in 0..rim {
        g.add_edge(rim, v);
    }
    g
}

fn k23() -> Graph {
    Graph::from_edges([(0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4)])
}

/// Smallest fill size by trying every subset of non-edges in increasing size.
fn brute_force_min_fill(g: &Graph) -> usize {
    let nodes: Vec<Node> = g.nodes().collect();
    let mut non_edges = Vec::new();
    for (i, &u) in nodes.iter().enumerate() {
        for &v in &nodes[i + 1..] {
            if !g.has_edge(u, v) {
                non_edges.push((u, v));
            }
        }
    }
    fn any_chordal(g: &Graph, pool: &[Edge], start: usize, left: usize, picked: &mut Vec<Edge>) -> bool {
        if left == 0 {
            return g.with_added_edges(picked.iter()).is_chordal();
        }
        (start..pool.len()).any(|i| {
            picked.push(pool[i]);
            let hit = any_chordal(g, pool, i + 1, left - 1, picked);
            picked.pop();
            hit
        })
    }
    (0..=non_edges.len())
        .find(|&k| any_chordal(g, &non_edges, 0, k, &mut Vec::new()))
        .unwrap_or(non_edges.len())
}

fn working_graph(search: &MinimumTriangulation<'_>, g: &Graph) -> Graph {
    let included: Vec<Edge> = search
        .chords()
        .iter()
        .filter(|c| c.in_graph)
        .map(|c| (c.u, c.v))
        .collect();
    g.with_added_edges(&included)
}

fn active_cycles(search: &MinimumTriangulation<'_>) -> BTreeSet<Vec<Node>> {
    search
        .cycles()
        .iter()
        .filter(|c| c.in_graph)
        .map(|c| c.nodes.clone())
        .collect()
}

/// Active flags of cycles and chords, plus the counter.
fn snapshot(search: &MinimumTriangulation<'_>) -> (Vec<bool>, Vec<bool>, usize) {
    (
        search.cycles().iter().map(|c| c.in_graph).collect(),
        search.chords().iter().map(|c| c.in_graph).collect(),
        search.active_noncomplex_cycles(),
    )
}

#[test]
fn chordal_inputs_need_no_fill() {
    let cases = [
        Graph::cycle(3),
        Graph::from_edges([(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]),
        Graph::cycle(4).with_added_edges(&[(1, 3)]),
        wheel(3),
    ];
    for g in &cases {
        let mut search = MinimumTriangulation::new(g, SearchCfg::default());
        search.run().unwrap();
        assert!(search.fill_edges().is_empty());
        assert_eq!(search.stats().iterations, 0);
    }
}

#[test]
fn forest_never_enters_the_loop() {
    let g = Graph::from_edges([(0, 1), (1, 2), (1, 3), (4, 5)]);
    let mut search = MinimumTriangulation::new(&g, SearchCfg::default());
    search.run().unwrap();
    assert!(search.fill_edges().is_empty());
    assert_eq!(search.stats(), SearchStats::default());
    assert!(search.cycles().is_empty());
    assert_eq!(minimum_triangulation_size(&Graph::new()).unwrap(), 0);
}

#[test]
fn square_needs_one_chord() {
    let g = Graph::cycle(4);
    let mut search = MinimumTriangulation::new(&g, SearchCfg::default());
    search.run().unwrap();
    assert_eq!(search.fill_edges(), vec![(0, 2)]);
    assert_eq!(search.stats().completions, 1);
    assert!(search.triangulated().is_chordal());
}

#[test]
fn simple_cycles_need_k_minus_three_chords() {
    for k in 4..=9u32 {
        let g = Graph::cycle(k);
        let res = triangulate_minimum(&g, SearchCfg::default()).unwrap();
        assert_eq!(res.size, (k - 3) as usize, "C{k}");
        assert!(res.triangulated.is_chordal(), "C{k}");
        assert_eq!(res.mean, res.size as f64);
        assert_eq!(res.variance, 0.0);
        assert_eq!(res.repetitions, 1);
    }
}

#[test]
fn long_chordless_cycle_is_rejected() {
    let err = find_minimum_triangulation(&Graph::cycle(17)).unwrap_err();
    assert_eq!(err, TriangulationError::CycleTooLarge { len: 17, limit: 16 });

    let cfg = SearchCfg {
        max_cycle_len: 5,
        ..SearchCfg::default()
    };
    let c6 = Graph::cycle(6);
    let mut search = MinimumTriangulation::new(&c6, cfg);
    assert_eq!(
        search.run(),
        Err(TriangulationError::CycleTooLarge { len: 6, limit: 5 })
    );
    assert_eq!(search.stats().iterations, 0);
    // At the limit the search still runs.
    assert_eq!(minimum_triangulation_size(&Graph::cycle(16)).unwrap(), 13);
}

#[test]
fn small_families_match_brute_force() {
    let cases = [
        ("K2,3", k23(), 1),
        ("W5", wheel(5), 2),
        ("W6", wheel(6), 3),
        ("grid 2x3", Graph::grid(2, 3), 2),
        ("grid 2x4", Graph::grid(2, 4), 3),
    ];
    for (name, g, expected) in cases {
        assert_eq!(brute_force_min_fill(&g), expected, "{name} oracle");
        assert_eq!(minimum_triangulation_size(&g).unwrap(), expected, "{name}");
    }
    let g = Graph::grid(3, 3);
    let res = triangulate_minimum(&g, SearchCfg::default()).unwrap();
    assert!(res.triangulated.is_chordal());
    assert_eq!(res.size, brute_force_min_fill(&g));
}

#[test]
fn fill_edges_are_normalized_new_edges() {
    let g = Graph::grid(3, 3);
    let fill = triangulate_minimum(&g, SearchCfg::default())
        .unwrap()
        .fill_edges;
    let distinct: BTreeSet<Edge> = fill.iter().copied().collect();
    assert_eq!(distinct.len(), fill.len());
    for &(a, b) in &fill {
        assert!(a < b);
        assert!(!g.has_edge(a, b));
    }
}

#[test]
fn repeated_runs_are_identical() {
    let g = Graph::grid(3, 3);
    let mut first = MinimumTriangulation::new(&g, SearchCfg::default());
    first.run().unwrap();
    let mut second = MinimumTriangulation::new(&g, SearchCfg::default());
    second.run().unwrap();
    assert_eq!(first.fill_edges(), second.fill_edges());
    assert_eq!(first.stats(), second.stats());
}

#[test]
fn bound_pruning_keeps_the_result() {
    let no_prune = SearchCfg {
        prune_with_bounds: false,
        ..SearchCfg::default()
    };
    for g in [Graph::cycle(7), wheel(6), Graph::grid(2, 4), k23()] {
        let mut pruned = MinimumTriangulation::new(&g, SearchCfg::default());
        pruned.run().unwrap();
        let mut full = MinimumTriangulation::new(&g, no_prune);
        full.run().unwrap();
        assert_eq!(pruned.fill_edges(), full.fill_edges());
        assert_eq!(full.stats().pruned, 0);
    }
    let g = Graph::cycle(7);
    let mut pruned = MinimumTriangulation::new(&g, SearchCfg::default());
    pruned.run().unwrap();
    let mut full = MinimumTriangulation::new(&g, no_prune);
    full.run().unwrap();
    assert!(pruned.stats().pruned > 0);
    assert!(pruned.stats().iterations < full.stats().iterations);
}

#[test]
fn forward_then_backward_restores_state() {
    let g = Graph::grid(3, 3);
    let mut search = MinimumTriangulation::new(&g, SearchCfg::default());
    assert!(search.initialize().unwrap());
    let (cycles_before, chords_before, count_before) = snapshot(&search);
    let n_cycles = cycles_before.len();

    let chord = search.next_chord(0).unwrap();
    search.include(chord);
    assert!(search.chords().get(chord).in_graph);
    assert_eq!(search.exclude_last(), Some(chord));

    let (cycles_after, chords_after, count_after) = snapshot(&search);
    assert_eq!(count_after, count_before);
    assert_eq!(&cycles_after[..n_cycles], &cycles_before[..]);
    assert!(cycles_after[n_cycles..].iter().all(|&active| !active));
    assert_eq!(&chords_after[..chords_before.len()], &chords_before[..]);
    assert!(chords_after[chords_before.len()..].iter().all(|&inc| !inc));
    assert!(search.chords().get(chord).induced_cycle_ids.is_empty());
    assert_eq!(search.exclude_last(), None);
}

#[test]
fn active_cycles_are_the_chordless_cycles_of_the_working_graph() {
    let g = Graph::grid(3, 3);
    let mut search = MinimumTriangulation::new(&g, SearchCfg::default());
    assert!(search.initialize().unwrap());

    let mut snapshots = vec![snapshot(&search)];
    // Any open chord of an active cycle; stops only once nothing is active.
    while let Some(chord) = search.next_chord(0) {
        search.include(chord);
        let working = working_graph(&search, &g);
        let expected: BTreeSet<Vec<Node>> = working.chordless_cycles().into_iter().collect();
        assert_eq!(active_cycles(&search), expected);
        assert_eq!(search.active_noncomplex_cycles(), expected.len());
        assert_eq!(search.longest_active_cycle(), expected.iter().map(Vec::len).max());
        snapshots.push(snapshot(&search));
    }
    assert!(working_graph(&search, &g).is_chordal());

    // Unwind and compare each level with what it looked like on the way down.
    snapshots.pop();
    while search.exclude_last().is_some() {
        let (cycles, chords, count) = snapshot(&search);
        let (want_cycles, want_chords, want_count) = snapshots.pop().unwrap();
        assert_eq!(count, want_count);
        assert_eq!(&cycles[..want_cycles.len()], &want_cycles[..]);
        assert_eq!(&chords[..want_chords.len()], &want_chords[..]);
        let working = working_graph(&search, &g);
        let expected: BTreeSet<Vec<Node>> = working.chordless_cycles().into_iter().collect();
        assert_eq!(active_cycles(&search), expected);
        assert_eq!(search.longest_active_cycle(), expected.iter().map(Vec::len).max());
    }
    assert!(snapshots.is_empty());
}

#[test]
fn zero_time_limit_aborts_the_search() {
    let cfg = SearchCfg {
        time_limit: Some(Duration::ZERO),
        ..SearchCfg::default()
    };
    let c6 = Graph::cycle(6);
    let mut search = MinimumTriangulation::new(&c6, cfg);
    assert_eq!(
        search.run(),
        Err(TriangulationError::TimeLimitExceeded {
            limit: Duration::ZERO
        })
    );
    assert!(search.fill_edges().is_empty());
    // Nothing to search: the limit is never consulted.
    assert!(triangulate_minimum(&Graph::cycle(3), cfg).is_ok());
    // A generous limit behaves like no limit.
    let cfg = SearchCfg {
        time_limit: Some(Duration::from_secs(3600)),
        ..SearchCfg::default()
    };
    assert_eq!(triangulate_minimum(&Graph::cycle(6), cfg).unwrap().size, 3);
}
