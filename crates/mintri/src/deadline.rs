//! Wall-clock time limit shared by the exact engine and the elimination game.

use std::time::{Duration, Instant};

use crate::error::TriangulationError;

/// A time limit anchored at the moment it was armed.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    started: Instant,
    limit: Duration,
}

impl Deadline {
    pub fn starting_now(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.started.elapsed() >= self.limit
    }

    /// `Err(TimeLimitExceeded)` once the limit is spent.
    #[inline]
    pub fn check(&self) -> Result<(), TriangulationError> {
        if self.expired() {
            return Err(TriangulationError::TimeLimitExceeded { limit: self.limit });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_expires_immediately() {
        let d = Deadline::starting_now(Duration::ZERO);
        assert!(d.expired());
        assert_eq!(
            d.check(),
            Err(TriangulationError::TimeLimitExceeded {
                limit: Duration::ZERO
            })
        );
    }

    #[test]
    fn generous_limit_does_not() {
        let d = Deadline::starting_now(Duration::from_secs(3600));
        assert!(!d.expired());
        assert!(d.check().is_ok());
        assert_eq!(d.limit(), Duration::from_secs(3600));
    }
}
