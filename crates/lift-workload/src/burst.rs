//! The `Burst` workload descriptor and its randomizer.

use lift_core::settings::ARRIVAL_WINDOW_MS;
use lift_core::{BurstId, SimRng};

// ── Randomizer ranges ─────────────────────────────────────────────────────────

/// People per burst: uniform in `[4, 30)`.
const AMOUNT_RANGE: std::ops::Range<u32> = 4..30;

/// Spread window per burst, in ms: uniform in `[500, 8000)`.
const TIME_RANGE_MS: std::ops::Range<u64> = 500..8_000;

// ── Burst ─────────────────────────────────────────────────────────────────────

/// A sparse workload descriptor: `amount` people appearing at `origin_floor`
/// bound for `destination_floor`, clustered around `time_ms` with a spread
/// window of `time_range_ms`.
///
/// Floors are **1-indexed** here — this is the externally edited
/// representation (CSV rows, UI tables).  [`compile_schedule`] converts to
/// the 0-indexed floors the simulation uses.
///
/// [`compile_schedule`]: crate::compile_schedule
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Burst {
    pub id: BurstId,

    /// Center of the burst, in ms from simulation start.
    pub time_ms: u64,

    /// Number of individual arrivals this burst expands into.
    pub amount: u32,

    /// 1-indexed origin floor.
    pub origin_floor: usize,

    /// 1-indexed destination floor; never equal to `origin_floor`.
    pub destination_floor: usize,

    /// Spread window in ms.  The expansion treats this as the 6-sigma band
    /// of a normal distribution; `0` puts every arrival exactly at `time_ms`.
    pub time_range_ms: u64,
}

// ── Randomizer ────────────────────────────────────────────────────────────────

/// Produce `count` random bursts for a `floor_count`-floor building, sorted
/// ascending by center time.
///
/// Times are uniform over the arrival window, amounts and spreads over their
/// configured ranges, and origin/destination are distinct floors drawn
/// uniformly from `[1, floor_count]`.  Ids are assigned sequentially from 0;
/// callers merging randomized bursts into an existing set should re-assign
/// ids themselves.
pub fn randomize_bursts(count: usize, floor_count: usize, rng: &mut SimRng) -> Vec<Burst> {
    let mut bursts: Vec<Burst> = (0..count)
        .map(|i| {
            let origin_floor = rng.gen_range(1..=floor_count);
            let destination_floor = loop {
                let f = rng.gen_range(1..=floor_count);
                if f != origin_floor {
                    break f;
                }
            };
            Burst {
                id: BurstId(i as u32),
                time_ms: rng.gen_range(0..ARRIVAL_WINDOW_MS),
                amount: rng.gen_range(AMOUNT_RANGE),
                origin_floor,
                destination_floor,
                time_range_ms: rng.gen_range(TIME_RANGE_MS),
            }
        })
        .collect();

    bursts.sort_by_key(|b| b.time_ms);
    bursts
}
