//! compare — head-to-head policy comparison for the rust_lift framework.
//!
//! Runs the basic (nearest-first) and advanced (direction-aware) dispatch
//! policies against the same embedded workload and prints a latency
//! comparison plus per-floor exit counters.  Swap the embedded CSV for
//! `load_bursts_csv(path)` to replay a recorded workload.

use std::collections::BTreeMap;
use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;

use lift_core::{ElevatorId, Millis, SimSettings};
use lift_policy::PolicyKind;
use lift_sim::{ServiceBuilder, SimObserver};
use lift_workload::load_bursts_reader;

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOOR_COUNT:    usize = 10;
const ELEVATOR_COUNT: usize = 2;
const SPEED_MS:       u64   = 100; // per floor crossed
const DWELL_MS:       u64   = 400;
const SEED:           u64   = 42;

// ── Workload CSV ──────────────────────────────────────────────────────────────

// Floors 1-indexed.  A morning-rush shape: two lobby up-bursts, a mid-window
// inter-floor trickle, and a late down-burst back to the lobby.
const WORKLOAD_CSV: &str = "\
time_ms,amount,origin_floor,destination_floor,time_range_ms\n\
1000,18,1,7,3000\n\
4000,12,1,9,2000\n\
9000,6,4,8,4000\n\
14000,8,6,2,3000\n\
20000,15,10,1,5000\n\
26000,9,3,10,2500\n\
";

// ── Observer: count moves per policy ──────────────────────────────────────────

#[derive(Default)]
struct MoveCounter {
    moves: BTreeMap<&'static str, usize>,
    settled_at: Millis,
}

impl SimObserver for MoveCounter {
    fn on_transit_start(
        &mut self,
        _now: Millis,
        policy: &'static str,
        _car: ElevatorId,
        _from: usize,
        _to: usize,
        _duration_ms: u64,
    ) {
        *self.moves.entry(policy).or_default() += 1;
    }

    fn on_settled(&mut self, now: Millis) {
        self.settled_at = now;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== compare — rust_lift dispatch policies ===");
    println!(
        "Floors: {FLOOR_COUNT}  |  Elevators: {ELEVATOR_COUNT}  |  \
         Speed: {SPEED_MS} ms/floor  |  Dwell: {DWELL_MS} ms  |  Seed: {SEED}"
    );
    println!();

    // 1. Load the embedded workload.
    let bursts = load_bursts_reader(Cursor::new(WORKLOAD_CSV))?;
    let total_arrivals: u32 = bursts.iter().map(|b| b.amount).sum();
    println!("Workload: {} bursts, {} arrivals", bursts.len(), total_arrivals);

    // 2. Build the service with both policies on the same arrival stream.
    let mut service = ServiceBuilder::new()
        .settings(SimSettings::clamped(
            FLOOR_COUNT,
            ELEVATOR_COUNT,
            SPEED_MS,
            DWELL_MS,
        ))
        .seed(SEED)
        .policy(PolicyKind::Basic)
        .policy(PolicyKind::Advanced)
        .bursts(bursts)
        .build()?;

    // 3. Run to quiescence.
    let mut obs = MoveCounter::default();
    let t0 = Instant::now();
    service.start();
    service.run_until_settled(&mut obs);
    let elapsed = t0.elapsed();

    println!(
        "Settled at {} simulated ({:.3} s wall)",
        obs.settled_at,
        elapsed.as_secs_f64()
    );
    println!();

    // 4. Comparison table.
    let report = service.performance_report();
    println!(
        "{:<10} {:>10} {:>11} {:>8} {:>7}",
        "Policy", "Avg wait", "Avg travel", "People", "Moves"
    );
    println!("{}", "-".repeat(50));
    for (name, stats) in &report {
        println!(
            "{:<10} {:>8}ms {:>9}ms {:>8} {:>7}",
            name,
            stats.avg_waiting_ms,
            stats.avg_travel_ms,
            stats.total_people,
            obs.moves.get(name).copied().unwrap_or(0),
        );
    }
    println!();

    // 5. Per-floor exit counters (ground floor first).
    println!("{:<8} {:>8} {:>10}", "Floor", "basic", "advanced");
    println!("{}", "-".repeat(28));
    for floor in 0..FLOOR_COUNT {
        let exits: Vec<u64> = service
            .instances
            .iter()
            .map(|inst| inst.building.floors[floor].exits)
            .collect();
        println!("{:<8} {:>8} {:>10}", floor + 1, exits[0], exits[1]);
    }

    Ok(())
}
