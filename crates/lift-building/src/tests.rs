//! Unit tests for lift-building.

use lift_core::{Millis, PersonId};

use crate::{Building, Direction, Elevator, MetricsLog, Person};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn person(id: u64, destination: usize) -> Person {
    Person::new(PersonId(id), destination, Millis::ZERO)
}

// ── Person ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod person_state {
    use super::*;

    #[test]
    fn board_stamps_once_and_returns_wait() {
        let mut p = Person::new(PersonId(0), 3, Millis(100));
        assert_eq!(p.picked_up_at, None);
        let wait = p.board(Millis(350));
        assert_eq!(wait, 250);
        assert_eq!(p.picked_up_at, Some(Millis(350)));
    }

    #[test]
    fn required_direction() {
        let p = person(0, 5);
        assert_eq!(p.required_direction(2), Some(Direction::Up));
        assert_eq!(p.required_direction(8), Some(Direction::Down));
        assert_eq!(p.required_direction(5), None);
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod elevator_state {
    use lift_core::settings::ELEVATOR_CAPACITY;
    use lift_core::ElevatorId;

    use super::*;

    #[test]
    fn transit_lifecycle() {
        let mut e = Elevator::new(ElevatorId(0));
        assert!(!e.is_busy());

        let duration = e.begin_transit(3, 100);
        assert_eq!(duration, 300);
        assert!(e.is_busy());
        assert_eq!(e.direction, Direction::Up);
        assert_eq!(e.target_floor(), 3);
        // Departure floor is unchanged until landing.
        assert_eq!(e.current_floor, 0);

        e.complete_transit();
        assert!(!e.is_busy());
        assert_eq!(e.current_floor, 3);
        assert_eq!(e.target_floor(), 3);
    }

    #[test]
    fn zero_length_transit_keeps_direction() {
        let mut e = Elevator::new(ElevatorId(0));
        e.direction = Direction::Down;
        let duration = e.begin_transit(0, 100);
        assert_eq!(duration, 0);
        assert_eq!(e.direction, Direction::Down);
    }

    #[test]
    fn stale_complete_is_a_noop() {
        let mut e = Elevator::new(ElevatorId(0));
        e.current_floor = 2;
        e.complete_transit();
        assert_eq!(e.current_floor, 2);
    }

    #[test]
    fn committed_direction_majority_vote() {
        let mut e = Elevator::new(ElevatorId(0));
        e.current_floor = 3;
        assert_eq!(e.committed_direction(), None); // empty

        e.riders.push(person(0, 5));
        e.riders.push(person(1, 6));
        e.riders.push(person(2, 1));
        assert_eq!(e.committed_direction(), Some(Direction::Up));

        e.riders.push(person(3, 0));
        assert_eq!(e.committed_direction(), None); // 2 up vs 2 down
    }

    #[test]
    fn drop_off_takes_only_matching_riders() {
        let mut e = Elevator::new(ElevatorId(0));
        e.riders.push(person(0, 2));
        e.riders.push(person(1, 4));
        e.riders.push(person(2, 2));

        let dropped = e.drop_off_at(2);
        assert_eq!(dropped.len(), 2);
        assert_eq!(e.riders.len(), 1);
        assert_eq!(e.riders[0].id, PersonId(1));
    }

    #[test]
    fn spare_capacity() {
        let mut e = Elevator::new(ElevatorId(0));
        assert_eq!(e.spare_capacity(), ELEVATOR_CAPACITY);
        for i in 0..ELEVATOR_CAPACITY {
            e.riders.push(person(i as u64, 1));
        }
        assert_eq!(e.spare_capacity(), 0);
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod building_state {
    use super::*;

    #[test]
    fn new_building_shape() {
        let b = Building::new(6);
        assert_eq!(b.floor_count(), 6);
        assert_eq!(b.elevators.len(), 1);
        assert!(b.is_empty());
        assert_eq!(b.total_exits(), 0);
    }

    #[test]
    fn add_elevator_caps_at_three() {
        let mut b = Building::new(4);
        assert!(b.add_elevator());
        assert!(b.add_elevator());
        assert!(!b.add_elevator()); // silent cap
        assert_eq!(b.elevators.len(), 3);
    }

    #[test]
    fn set_elevator_count_grows_and_shrinks() {
        let mut b = Building::new(4);
        assert_eq!(b.set_elevator_count(3), 3);
        assert_eq!(b.set_elevator_count(1), 1);
        // Out-of-range values clamp.
        assert_eq!(b.set_elevator_count(9), 3);
        assert_eq!(b.set_elevator_count(0), 1);
    }

    #[test]
    fn shrink_never_discards_riders() {
        let mut b = Building::new(4);
        b.set_elevator_count(3);
        b.elevators[2].riders.push(person(0, 1));

        // Elevator 2 carries a rider: the shrink stops before it.
        assert_eq!(b.set_elevator_count(1), 3);
        assert_eq!(b.rider_count(), 1);

        // Once empty, the shrink goes through.
        b.elevators[2].riders.clear();
        assert_eq!(b.set_elevator_count(1), 1);
    }

    #[test]
    fn shrink_skips_busy_elevator() {
        let mut b = Building::new(4);
        b.set_elevator_count(2);
        b.elevators[1].begin_transit(3, 100);
        assert_eq!(b.set_elevator_count(1), 2);
        b.elevators[1].complete_transit();
        assert_eq!(b.set_elevator_count(1), 1);
    }

    #[test]
    fn push_waiting_bounds_checked() {
        let mut b = Building::new(4);
        assert!(b.push_waiting(0, person(0, 3)));
        assert!(!b.push_waiting(4, person(1, 3))); // origin out of range
        assert!(!b.push_waiting(0, person(2, 4))); // destination out of range
        assert_eq!(b.waiting_count(), 1);
        assert!(b.has_demand());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut b = Building::new(4);
        b.push_waiting(1, person(0, 3));
        b.elevators[0].riders.push(person(1, 2));
        b.elevators[0].current_floor = 2;
        b.floors[3].exits = 7;

        b.reset(6);
        assert_eq!(b.floor_count(), 6);
        assert!(b.is_empty());
        assert_eq!(b.total_exits(), 0);
        assert_eq!(b.elevators[0].current_floor, 0);
    }
}

// ── MetricsLog ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics {
    use super::*;

    #[test]
    fn empty_log_reports_zero() {
        let m = MetricsLog::new();
        assert_eq!(m.avg_wait_ms(), 0);
        assert_eq!(m.avg_travel_ms(), 0);
        assert_eq!(m.total_people(), 0);
    }

    #[test]
    fn means_round_to_nearest() {
        let mut m = MetricsLog::new();
        m.record_wait(100);
        m.record_wait(101);
        assert_eq!(m.avg_wait_ms(), 101); // 100.5 rounds up

        m.record_travel(300);
        m.record_travel(301);
        m.record_travel(301);
        assert_eq!(m.avg_travel_ms(), 301); // 300.67 rounds to 301
        assert_eq!(m.total_people(), 2);
    }

    #[test]
    fn clear_empties_both_logs() {
        let mut m = MetricsLog::new();
        m.record_wait(5);
        m.record_travel(10);
        m.clear();
        assert_eq!(m.total_people(), 0);
        assert_eq!(m.avg_travel_ms(), 0);
    }
}
