//! Unit tests for lift-workload.

use lift_core::{BurstId, SimRng};

use crate::{compile_schedule, expand_burst, randomize_bursts, Burst};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn burst(time_ms: u64, amount: u32, range_ms: u64) -> Burst {
    Burst {
        id: BurstId(0),
        time_ms,
        amount,
        origin_floor: 2,
        destination_floor: 4,
        time_range_ms: range_ms,
    }
}

// ── Randomizer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod randomizer {
    use super::*;

    #[test]
    fn produces_count_sorted_by_time() {
        let mut rng = SimRng::new(42);
        let bursts = randomize_bursts(15, 4, &mut rng);
        assert_eq!(bursts.len(), 15);
        assert!(bursts.windows(2).all(|w| w[0].time_ms <= w[1].time_ms));
    }

    #[test]
    fn fields_inside_ranges() {
        let mut rng = SimRng::new(7);
        for b in randomize_bursts(200, 6, &mut rng) {
            assert!(b.time_ms < 30_000);
            assert!((4..30).contains(&b.amount));
            assert!((1..=6).contains(&b.origin_floor));
            assert!((1..=6).contains(&b.destination_floor));
            assert_ne!(b.origin_floor, b.destination_floor);
            assert!((500..8_000).contains(&b.time_range_ms));
        }
    }

    #[test]
    fn seeded_runs_are_identical() {
        let a = randomize_bursts(15, 8, &mut SimRng::new(5));
        let b = randomize_bursts(15, 8, &mut SimRng::new(5));
        assert_eq!(a, b);
    }
}

// ── Expansion ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod expansion {
    use super::*;

    #[test]
    fn degenerate_range_lands_all_at_center() {
        let mut rng = SimRng::new(1);
        let events = expand_burst(&burst(5_000, 5, 0), &mut rng);
        assert_eq!(events.len(), 5);
        assert!(events.iter().all(|e| e.time.0 == 5_000));
    }

    #[test]
    fn floors_converted_to_zero_indexed() {
        let mut rng = SimRng::new(1);
        let events = expand_burst(&burst(5_000, 3, 0), &mut rng);
        assert!(events.iter().all(|e| e.origin == 1 && e.destination == 3));
    }

    #[test]
    fn empirical_mean_and_std_match_the_model() {
        // sigma = range/6 = 1000; with 1000 samples the empirical mean and
        // std should land well inside ±100 / ±50 of the model.
        let mut rng = SimRng::new(42);
        let events = expand_burst(&burst(15_000, 1_000, 6_000), &mut rng);
        assert_eq!(events.len(), 1_000);

        let n = events.len() as f64;
        let mean = events.iter().map(|e| e.time.0 as f64).sum::<f64>() / n;
        let var = events
            .iter()
            .map(|e| {
                let d = e.time.0 as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        let std = var.sqrt();

        assert!((mean - 15_000.0).abs() < 100.0, "mean {mean}");
        assert!((std - 1_000.0).abs() < 50.0, "std {std}");
    }

    #[test]
    fn center_clamped_into_window() {
        // Center 0 with a 2000 ms window must behave as if centered at 1000,
        // so essentially all mass lands in [0, 2000] and the mean near 1000.
        let mut rng = SimRng::new(9);
        let events = expand_burst(&burst(0, 1_000, 2_000), &mut rng);
        let mean =
            events.iter().map(|e| e.time.0 as f64).sum::<f64>() / events.len() as f64;
        assert!((mean - 1_000.0).abs() < 50.0, "mean {mean}");

        // And symmetrically at the top of the window.
        let events = expand_burst(&burst(30_000, 1_000, 2_000), &mut rng);
        let mean =
            events.iter().map(|e| e.time.0 as f64).sum::<f64>() / events.len() as f64;
        assert!((mean - 29_000.0).abs() < 50.0, "mean {mean}");
    }

    #[test]
    fn no_negative_times() {
        let mut rng = SimRng::new(3);
        // Tight center, huge spread: tails would go negative without flooring.
        let events = expand_burst(&burst(100, 500, 8_000), &mut rng);
        assert_eq!(events.len(), 500);
        // All times are u64 by construction; just assert the expansion ran
        // and some mass actually hit the floor-at-zero path's neighborhood.
        assert!(events.iter().any(|e| e.time.0 < 4_000));
    }
}

// ── Schedule compiler ─────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule {
    use super::*;

    #[test]
    fn flattens_and_sorts() {
        let bursts = vec![
            Burst { id: BurstId(0), time_ms: 20_000, amount: 3, origin_floor: 1, destination_floor: 2, time_range_ms: 0 },
            Burst { id: BurstId(1), time_ms: 1_000, amount: 2, origin_floor: 2, destination_floor: 1, time_range_ms: 0 },
        ];
        let mut rng = SimRng::new(0);
        let schedule = compile_schedule(&bursts, &mut rng);
        assert_eq!(schedule.len(), 5);
        assert!(schedule.windows(2).all(|w| w[0].time <= w[1].time));
        assert_eq!(schedule[0].burst, BurstId(1));
        assert_eq!(schedule[4].burst, BurstId(0));
    }

    #[test]
    fn deterministic_for_a_seed() {
        let mut rng_a = SimRng::new(77);
        let mut rng_b = SimRng::new(77);
        let bursts = randomize_bursts(10, 5, &mut rng_a.child(1));
        let bursts_b = randomize_bursts(10, 5, &mut rng_b.child(1));
        assert_eq!(
            compile_schedule(&bursts, &mut rng_a),
            compile_schedule(&bursts_b, &mut rng_b)
        );
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::load_bursts_reader;
    use lift_core::BurstId;

    const CSV: &[u8] = b"\
time_ms,amount,origin_floor,destination_floor,time_range_ms\n\
0,10,2,4,0\n\
12000,25,3,1,4000\n\
";

    #[test]
    fn loads_rows_with_sequential_ids() {
        let bursts = load_bursts_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(bursts.len(), 2);
        assert_eq!(bursts[0].id, BurstId(0));
        assert_eq!(bursts[1].id, BurstId(1));
        assert_eq!(bursts[1].amount, 25);
        assert_eq!(bursts[1].time_range_ms, 4_000);
    }

    #[test]
    fn rejects_equal_origin_and_destination() {
        let bad = b"\
time_ms,amount,origin_floor,destination_floor,time_range_ms\n\
0,10,2,2,0\n\
";
        assert!(load_bursts_reader(Cursor::new(bad.as_slice())).is_err());
    }

    #[test]
    fn rejects_zero_amount_and_zero_floor() {
        let zero_amount = b"\
time_ms,amount,origin_floor,destination_floor,time_range_ms\n\
0,0,1,2,0\n\
";
        assert!(load_bursts_reader(Cursor::new(zero_amount.as_slice())).is_err());

        let zero_floor = b"\
time_ms,amount,origin_floor,destination_floor,time_range_ms\n\
0,5,0,2,0\n\
";
        assert!(load_bursts_reader(Cursor::new(zero_floor.as_slice())).is_err());
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let garbage = b"\
time_ms,amount,origin_floor,destination_floor,time_range_ms\n\
not,a,number,at,all\n\
";
        assert!(load_bursts_reader(Cursor::new(garbage.as_slice())).is_err());
    }
}
