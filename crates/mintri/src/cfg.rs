//! Fixed limits (internal).
//!
//! `SearchCfg::default()` picks these up; experiments may override them per run.

/// Longest chordless input cycle the exact engine accepts.
pub const MAX_CYCLE_LEN: usize = 16;
