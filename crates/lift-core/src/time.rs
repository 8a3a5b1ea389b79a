//! Simulated time model.
//!
//! # Design
//!
//! Time is a monotonically increasing count of simulated milliseconds since
//! service start.  There is no wall clock anywhere in the core: the event
//! queue advances `Millis` directly from one armed timer to the next, so all
//! duration arithmetic is exact integer math and a run is replayable from its
//! seed alone.
//!
//! One millisecond of resolution matches the workload format (burst centers
//! and spreads are specified in ms) and the motion model (elevator speed is
//! ms per floor crossed).

use std::fmt;

/// An absolute simulated timestamp, in milliseconds since service start.
///
/// Stored as `u64`: at 1 ms resolution a u64 lasts ~585 million years, so
/// overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Return the timestamp `n` milliseconds after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Millis {
        Millis(self.0 + n)
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0 + rhs)
    }
}

impl std::ops::Sub for Millis {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Millis) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
