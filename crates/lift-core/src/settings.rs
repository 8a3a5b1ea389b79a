//! Simulation settings and the named bounds of the system.
//!
//! The presentation layer is expected to keep its controls inside these
//! ranges; the core clamps defensively rather than erroring, so a slightly
//! out-of-range value degrades to the nearest legal one instead of faulting
//! mid-run.

/// Maximum riders inside one elevator car.
pub const ELEVATOR_CAPACITY: usize = 10;

/// A building runs between one and three elevators.
pub const MIN_ELEVATORS: usize = 1;
pub const MAX_ELEVATORS: usize = 3;

/// A building has between 4 and 20 floors.
pub const MIN_FLOORS: usize = 4;
pub const MAX_FLOORS: usize = 20;

/// Elevator speed bounds, in ms of travel per floor crossed.
pub const MIN_SPEED_MS: u64 = 1;
pub const MAX_SPEED_MS: u64 = 400;

/// Length of the arrival window: all scheduled workload lands within the
/// first 30 simulated seconds.  Draining may run past this point.
pub const ARRIVAL_WINDOW_MS: u64 = 30_000;

/// Default pause after a completed move before re-evaluating dispatch
/// (models door-dwell time).
pub const DEFAULT_DWELL_MS: u64 = 400;

/// Delay before re-trying dispatch when demand exists but every elevator is
/// mid-flight.  A liveness mechanism, not an error path.
pub const RETRY_DELAY_MS: u64 = 500;

/// Safety margin added on top of transit + dwell before the watchdog checks
/// for an idle elevator still carrying riders.
pub const WATCHDOG_MARGIN_MS: u64 = 200;

// ── SimSettings ───────────────────────────────────────────────────────────────

/// Per-instance simulation configuration.
///
/// Construct via [`SimSettings::clamped`] so every field is inside its legal
/// range regardless of what the caller hands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SimSettings {
    /// Number of floors, in `[MIN_FLOORS, MAX_FLOORS]`.
    pub floor_count: usize,

    /// Number of elevators, in `[MIN_ELEVATORS, MAX_ELEVATORS]`.
    pub elevator_count: usize,

    /// Travel time per floor crossed, in ms.  A move over `n` floors takes
    /// `n * speed_ms_per_floor`.
    pub speed_ms_per_floor: u64,

    /// Door-dwell pause after landing, before dispatch is re-evaluated.
    pub dwell_ms: u64,
}

impl SimSettings {
    /// Build settings with every field clamped into its legal range.
    pub fn clamped(
        floor_count: usize,
        elevator_count: usize,
        speed_ms_per_floor: u64,
        dwell_ms: u64,
    ) -> Self {
        Self {
            floor_count: floor_count.clamp(MIN_FLOORS, MAX_FLOORS),
            elevator_count: elevator_count.clamp(MIN_ELEVATORS, MAX_ELEVATORS),
            speed_ms_per_floor: speed_ms_per_floor.clamp(MIN_SPEED_MS, MAX_SPEED_MS),
            dwell_ms,
        }
    }

    /// Duration of a move from `from` to `to`, in ms.
    #[inline]
    pub fn transit_ms(&self, from: usize, to: usize) -> u64 {
        self.speed_ms_per_floor * (from.abs_diff(to) as u64)
    }
}

impl Default for SimSettings {
    /// 4 floors, 1 elevator, 100 ms/floor, default dwell — the smallest
    /// legal building.
    fn default() -> Self {
        Self::clamped(MIN_FLOORS, MIN_ELEVATORS, 100, DEFAULT_DWELL_MS)
    }
}
