//! Error type shared by the exact search and the elimination game.

use std::time::Duration;

use thiserror::Error;

/// Failure modes that abort a triangulation run. No partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// A chordless cycle of the input exceeds the exact engine's limit.
    /// The search state for a k-cycle grows like 2^k; callers should skip the
    /// instance or fall back to the elimination game.
    #[error("maximum cycle length too large: found a chordless cycle with {len} nodes (limit {limit})")]
    CycleTooLarge { len: usize, limit: usize },
    /// The configured time limit elapsed before the computation finished.
    #[error("time limit exceeded after {limit:?}")]
    TimeLimitExceeded { limit: Duration },
}
