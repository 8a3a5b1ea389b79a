//! The basic nearest-floor policy.

use lift_building::{Building, Elevator};

use crate::DispatchPolicy;

/// Nearest-first dispatch: deliver to the closest rider destination, pick up
/// from the closest non-empty floor, admit anyone.
///
/// Ties break toward the first candidate encountered — boarding order for
/// destinations, lowest floor index for pickups (ascending scan).
pub struct NearestFirst;

impl DispatchPolicy for NearestFirst {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn select_destination(&self, elevator: &Elevator) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None; // (floor, distance)
        for person in &elevator.riders {
            let distance = elevator.current_floor.abs_diff(person.destination_floor);
            match best {
                Some((_, d)) if distance >= d => {}
                _ => best = Some((person.destination_floor, distance)),
            }
        }
        best.map(|(floor, _)| floor)
    }

    fn select_pickup(&self, building: &Building, elevator: usize) -> Option<usize> {
        let from = building.elevators[elevator].current_floor;
        let mut best: Option<(usize, usize)> = None;
        for (floor, state) in building.floors.iter().enumerate() {
            if !state.has_waiting() {
                continue;
            }
            let distance = from.abs_diff(floor);
            match best {
                Some((_, d)) if distance >= d => {}
                _ => best = Some((floor, distance)),
            }
        }
        best.map(|(floor, _)| floor)
    }
}
