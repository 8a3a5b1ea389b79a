//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! Every stochastic operation in the framework — burst randomization,
//! Box–Muller expansion — draws from a `SimRng` seeded from the run's master
//! seed.  The same seed always produces the same compiled schedule and
//! therefore the same simulation, which is what makes the head-to-head policy
//! comparison meaningful and the statistical tests in `lift-workload`
//! assertable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG — a thin wrapper over [`SmallRng`].
///
/// Used only in single-threaded contexts.  If a caller needs independent
/// streams (e.g. one per workload source), derive them with [`SimRng::child`]
/// so the streams stay decoupled from each other's draw counts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// giving sub-components their own deterministic streams.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A uniform draw in the open interval `(0, 1)`.
    ///
    /// Redraws while the sample is exactly 0 so the result is always safe to
    /// feed into `ln()` — the contract the Box–Muller transform needs.
    #[inline]
    pub fn unit_open(&mut self) -> f64 {
        loop {
            let u: f64 = self.0.gen_range(0.0..1.0);
            if u != 0.0 {
                return u;
            }
        }
    }
}
