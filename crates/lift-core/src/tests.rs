//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BurstId, ElevatorId, PersonId};

    #[test]
    fn index_helper() {
        assert_eq!(ElevatorId(2).index(), 2);
        assert_eq!(PersonId(42).index(), 42);
    }

    #[test]
    fn ordering() {
        assert!(PersonId(0) < PersonId(1));
        assert!(BurstId(100) > BurstId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(PersonId::INVALID.0, u64::MAX);
        assert_eq!(ElevatorId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(1).to_string(), "ElevatorId(1)");
    }
}

#[cfg(test)]
mod time {
    use crate::Millis;

    #[test]
    fn arithmetic() {
        let t = Millis(100);
        assert_eq!(t + 50, Millis(150));
        assert_eq!(t.offset(25), Millis(125));
        assert_eq!(Millis(300) - Millis(100), 200u64);
        assert_eq!(Millis(300).since(Millis(250)), 50);
    }

    #[test]
    fn display() {
        assert_eq!(Millis(300).to_string(), "300ms");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.gen_range(0u64..1_000_000), b.gen_range(0u64..1_000_000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let draws_a: Vec<u64> = (0..16).map(|_| a.gen_range(0..u64::MAX)).collect();
        let draws_b: Vec<u64> = (0..16).map(|_| b.gen_range(0..u64::MAX)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn child_streams_are_deterministic() {
        let mut root_a = SimRng::new(99);
        let mut root_b = SimRng::new(99);
        let mut child_a = root_a.child(1);
        let mut child_b = root_b.child(1);
        assert_eq!(child_a.gen_range(0u32..1000), child_b.gen_range(0u32..1000));
    }

    #[test]
    fn unit_open_stays_in_bounds() {
        let mut rng = SimRng::new(3);
        for _ in 0..10_000 {
            let u = rng.unit_open();
            assert!(u > 0.0 && u < 1.0);
        }
    }
}

#[cfg(test)]
mod settings {
    use crate::settings::{
        DEFAULT_DWELL_MS, MAX_ELEVATORS, MAX_FLOORS, MAX_SPEED_MS, MIN_ELEVATORS, MIN_FLOORS,
    };
    use crate::SimSettings;

    #[test]
    fn clamped_brings_fields_into_range() {
        let s = SimSettings::clamped(100, 9, 10_000, DEFAULT_DWELL_MS);
        assert_eq!(s.floor_count, MAX_FLOORS);
        assert_eq!(s.elevator_count, MAX_ELEVATORS);
        assert_eq!(s.speed_ms_per_floor, MAX_SPEED_MS);

        let s = SimSettings::clamped(0, 0, 0, 0);
        assert_eq!(s.floor_count, MIN_FLOORS);
        assert_eq!(s.elevator_count, MIN_ELEVATORS);
        assert_eq!(s.speed_ms_per_floor, 1);
    }

    #[test]
    fn transit_ms_scales_with_distance() {
        let s = SimSettings::clamped(10, 1, 100, 50);
        assert_eq!(s.transit_ms(0, 3), 300);
        assert_eq!(s.transit_ms(3, 0), 300);
        assert_eq!(s.transit_ms(5, 5), 0);
    }
}
