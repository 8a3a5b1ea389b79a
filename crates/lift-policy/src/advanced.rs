//! The direction-aware, load-balancing policy.
//!
//! Three refinements over [`NearestFirst`][crate::NearestFirst]:
//!
//! - **Direction-aware boarding** — once the riders' majority commits the car
//!   to a direction, only waiters needing that direction may board, so an
//!   upward-committed car never detours for a downward rider.
//! - **Batch delivery** — destination floors are scored by how many riders
//!   disembark there, not just proximity, favoring one stop that empties
//!   half the car over a nearer stop serving one person.
//! - **Pickup coordination** — pickup floors are scored by compatible demand
//!   and crowding, with a penalty when a peer elevator is already in flight
//!   toward the floor with enough spare capacity to absorb everyone waiting
//!   (avoids redundant convergence), and a small bonus when the peer cannot
//!   absorb them all (a second car should still commit).

use lift_building::{Building, Direction, Elevator, Person};

use crate::DispatchPolicy;

// ── Scoring weights ───────────────────────────────────────────────────────────

/// Destination score: `riders_disembarking * DROP_WEIGHT - distance`.
const DROP_WEIGHT: i64 = 5;

/// Pickup score: `compatible_waiting * PICKUP_WEIGHT - distance * DISTANCE_WEIGHT`.
const PICKUP_WEIGHT: i64 = 10;
const DISTANCE_WEIGHT: i64 = 2;

/// Crowding bonuses at ≥5 and ≥8 people waiting.
const CROWD_THRESHOLD: usize = 5;
const CROWD_BONUS: i64 = 15;
const HEAVY_CROWD_THRESHOLD: usize = 8;
const HEAVY_CROWD_BONUS: i64 = 25;

/// Alignment: the floor lies in the car's last travel direction (+5), and
/// the waiting majority there wants to keep going that way (+8 instead).
const ALIGN_BONUS: i64 = 5;
const STRONG_ALIGN_BONUS: i64 = 8;

/// A peer is already flying to the floor and can absorb the whole queue.
const CONVERGENCE_PENALTY: i64 = 20;

/// A peer is flying there but cannot absorb the whole queue.
const ASSIST_BONUS: i64 = 5;

// ── DirectionAware ────────────────────────────────────────────────────────────

/// The advanced policy.  See the module docs for the heuristics.
pub struct DirectionAware;

impl DispatchPolicy for DirectionAware {
    fn name(&self) -> &'static str {
        "advanced"
    }

    fn admits(&self, elevator: &Elevator, person: &Person) -> bool {
        match elevator.committed_direction() {
            None => true, // undecided car takes anyone
            Some(committed) => {
                match person.required_direction(elevator.current_floor) {
                    Some(required) => required == committed,
                    // Already on their floor; boarding them is harmless.
                    None => true,
                }
            }
        }
    }

    fn select_destination(&self, elevator: &Elevator) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None; // (floor, score)
        for person in &elevator.riders {
            let floor = person.destination_floor;
            let disembarking = elevator
                .riders
                .iter()
                .filter(|p| p.destination_floor == floor)
                .count() as i64;
            let distance = elevator.current_floor.abs_diff(floor) as i64;
            let score = disembarking * DROP_WEIGHT - distance;
            match best {
                Some((_, s)) if score <= s => {}
                _ => best = Some((floor, score)),
            }
        }
        best.map(|(floor, _)| floor)
    }

    fn select_pickup(&self, building: &Building, elevator: usize) -> Option<usize> {
        let car = &building.elevators[elevator];
        let mut best: Option<(usize, i64)> = None;

        for (floor, state) in building.floors.iter().enumerate() {
            let waiting = state.waiting_count();
            if waiting == 0 {
                continue;
            }
            let score = score_pickup(building, car, elevator, floor, waiting);
            match best {
                Some((_, s)) if score <= s => {}
                _ => best = Some((floor, score)),
            }
        }

        best.map(|(floor, _)| floor)
    }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

fn score_pickup(
    building: &Building,
    car: &Elevator,
    car_index: usize,
    floor: usize,
    waiting: usize,
) -> i64 {
    let compatible = building.floors[floor]
        .waiting
        .iter()
        .filter(|p| DirectionAware.admits(car, p))
        .count() as i64;
    let distance = car.current_floor.abs_diff(floor) as i64;

    let mut score = compatible * PICKUP_WEIGHT - distance * DISTANCE_WEIGHT;

    if waiting >= HEAVY_CROWD_THRESHOLD {
        score += HEAVY_CROWD_BONUS;
    } else if waiting >= CROWD_THRESHOLD {
        score += CROWD_BONUS;
    }

    score += alignment_bonus(building, car, floor);
    score += coordination_adjustment(building, car_index, floor, waiting);
    score
}

/// +5 when the floor continues the car's last travel direction; upgraded to
/// +8 when the waiting majority there also wants to keep moving that way.
fn alignment_bonus(building: &Building, car: &Elevator, floor: usize) -> i64 {
    let Some(travel) = Direction::between(car.current_floor, floor) else {
        return 0;
    };
    if travel != car.direction {
        return 0;
    }

    let (mut onward, mut reverse) = (0usize, 0usize);
    for person in &building.floors[floor].waiting {
        match person.required_direction(floor) {
            Some(d) if d == travel => onward += 1,
            Some(_) => reverse += 1,
            None => {}
        }
    }
    if onward > reverse {
        STRONG_ALIGN_BONUS
    } else {
        ALIGN_BONUS
    }
}

/// −20 when a peer already in flight to `floor` can absorb the whole queue;
/// +5 when peers are flying there but their combined spare capacity falls
/// short, so a second car still commits.
fn coordination_adjustment(
    building: &Building,
    car_index: usize,
    floor: usize,
    waiting: usize,
) -> i64 {
    let mut targeted = false;
    let mut absorbed = false;

    for (i, peer) in building.elevators.iter().enumerate() {
        if i == car_index || !peer.is_busy() || peer.target_floor() != floor {
            continue;
        }
        targeted = true;
        if peer.spare_capacity() >= waiting {
            absorbed = true;
        }
    }

    if absorbed {
        -CONVERGENCE_PENALTY
    } else if targeted {
        ASSIST_BONUS
    } else {
        0
    }
}
