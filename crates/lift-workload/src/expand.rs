//! Burst expansion and schedule compilation.
//!
//! # Spread model
//!
//! A burst centered at `t` with spread window `r` draws its arrival times
//! from a normal distribution with mean `t` and standard deviation `r/6`, so
//! the window `[t - r/2, t + r/2]` is the 3-sigma band covering ≈99.7% of the
//! mass.  Samples come from a Box–Muller transform over two open-interval
//! uniforms.
//!
//! Before sampling, the mean is clamped so the 3-sigma band stays inside the
//! arrival window — a burst centered at t=0 with a 2000 ms spread effectively
//! centers at 1000 ms.  Individual samples are still floored at 0 afterwards
//! (the tail beyond 3 sigma can land anywhere).

use lift_core::settings::ARRIVAL_WINDOW_MS;
use lift_core::{BurstId, Millis, SimRng};

use crate::Burst;

// ── ArrivalEvent ──────────────────────────────────────────────────────────────

/// One compiled arrival: a person appears at `origin` wanting `destination`.
///
/// Floors are **0-indexed** — conversion from the burst's 1-indexed external
/// form happens at compile time, so the simulation core never sees a
/// 1-indexed floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrivalEvent {
    /// Offset from simulation start at which the arrival fires.
    pub time: Millis,

    /// 0-indexed origin floor.
    pub origin: usize,

    /// 0-indexed destination floor.
    pub destination: usize,

    /// The burst this event was expanded from.
    pub burst: BurstId,
}

// ── Expansion ─────────────────────────────────────────────────────────────────

/// Expand one burst into `burst.amount` arrival events.
///
/// Event times are rounded to the nearest millisecond and floored at 0.  The
/// degenerate `time_range_ms == 0` case lands every event exactly at the
/// center without consuming any RNG draws.
pub fn expand_burst(burst: &Burst, rng: &mut SimRng) -> Vec<ArrivalEvent> {
    let origin = burst.origin_floor.saturating_sub(1);
    let destination = burst.destination_floor.saturating_sub(1);

    if burst.time_range_ms == 0 {
        return (0..burst.amount)
            .map(|_| ArrivalEvent {
                time: Millis(burst.time_ms),
                origin,
                destination,
                burst: burst.id,
            })
            .collect();
    }

    let center = clamp_center(burst.time_ms, burst.time_range_ms);
    let sigma = burst.time_range_ms as f64 / 6.0;

    (0..burst.amount)
        .map(|_| {
            let u = rng.unit_open();
            let v = rng.unit_open();
            let normal = (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos();
            let sample = (center + normal * sigma).max(0.0).round() as u64;
            ArrivalEvent {
                time: Millis(sample),
                origin,
                destination,
                burst: burst.id,
            }
        })
        .collect()
}

/// Compile a burst set into a flat, time-sorted arrival schedule.
///
/// The sort is stable, so events at equal times keep burst order followed by
/// draw order — deterministic for a given seed.
pub fn compile_schedule(bursts: &[Burst], rng: &mut SimRng) -> Vec<ArrivalEvent> {
    let mut schedule: Vec<ArrivalEvent> = bursts
        .iter()
        .flat_map(|b| expand_burst(b, rng))
        .collect();
    schedule.sort_by_key(|e| e.time);
    schedule
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Shift `center` so `[center - range/2, center + range/2]` fits inside the
/// arrival window.
fn clamp_center(center_ms: u64, range_ms: u64) -> f64 {
    let half = range_ms as f64 / 2.0;
    let mut center = center_ms as f64;
    if center - half < 0.0 {
        center = half;
    }
    if center + half > ARRIVAL_WINDOW_MS as f64 {
        center = ARRIVAL_WINDOW_MS as f64 - half;
    }
    center
}
