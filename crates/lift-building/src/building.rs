//! The building: floors plus elevators, with lifecycle operations.

use lift_core::settings::{MAX_ELEVATORS, MIN_ELEVATORS};
use lift_core::ElevatorId;

use crate::{Elevator, Floor, Person};

/// One simulation instance's physical world.
#[derive(Debug)]
pub struct Building {
    pub floors: Vec<Floor>,
    pub elevators: Vec<Elevator>,
}

impl Building {
    /// A fresh building: empty floor queues, zeroed exit counters, one idle
    /// elevator at floor 0.
    pub fn new(floor_count: usize) -> Self {
        Self {
            floors: (0..floor_count).map(|_| Floor::new()).collect(),
            elevators: vec![Elevator::new(ElevatorId(0))],
        }
    }

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Re-allocate floors to `floor_count` and return every elevator to the
    /// initial state.  The owning instance clears its metrics and bumps its
    /// timer generation alongside this.
    pub fn reset(&mut self, floor_count: usize) {
        self.floors = (0..floor_count).map(|_| Floor::new()).collect();
        for elevator in &mut self.elevators {
            elevator.reset();
        }
    }

    /// Append a new idle elevator at floor 0.  Silent no-op at the cap of
    /// [`MAX_ELEVATORS`]; returns whether an elevator was added.
    pub fn add_elevator(&mut self) -> bool {
        if self.elevators.len() >= MAX_ELEVATORS {
            return false;
        }
        let id = ElevatorId(self.elevators.len() as u32);
        self.elevators.push(Elevator::new(id));
        true
    }

    /// Grow or shrink toward `n` elevators (clamped to the legal range).
    ///
    /// Growth appends idle elevators at floor 0.  Shrinking truncates from
    /// the highest index but stops at the first elevator that is busy or
    /// carrying riders — passengers are never silently discarded.  Returns
    /// the resulting count; callers wanting an exact shrink re-issue the call
    /// once the building drains.
    pub fn set_elevator_count(&mut self, n: usize) -> usize {
        let n = n.clamp(MIN_ELEVATORS, MAX_ELEVATORS);
        while self.elevators.len() < n {
            self.add_elevator();
        }
        while self.elevators.len() > n {
            let last = &self.elevators[self.elevators.len() - 1];
            if last.is_busy() || !last.riders.is_empty() {
                break;
            }
            self.elevators.pop();
        }
        self.elevators.len()
    }

    /// Append `person` to the waiting queue at `origin`.
    ///
    /// Returns `false` (dropping the person) if either floor is outside this
    /// building — the fan-out caller injects into every instance and smaller
    /// buildings simply don't see arrivals beyond their top floor.
    pub fn push_waiting(&mut self, origin: usize, person: Person) -> bool {
        if origin >= self.floor_count() || person.destination_floor >= self.floor_count() {
            return false;
        }
        self.floors[origin].waiting.push_back(person);
        true
    }

    // ── Accounting ────────────────────────────────────────────────────────

    /// People currently waiting across all floor queues.
    pub fn waiting_count(&self) -> usize {
        self.floors.iter().map(Floor::waiting_count).sum()
    }

    /// People currently riding across all elevators.
    pub fn rider_count(&self) -> usize {
        self.elevators.iter().map(|e| e.riders.len()).sum()
    }

    /// People who have ever disembarked, summed over all floors.
    pub fn total_exits(&self) -> u64 {
        self.floors.iter().map(|f| f.exits).sum()
    }

    /// True iff no one is waiting and no one is riding.
    pub fn is_empty(&self) -> bool {
        self.waiting_count() == 0 && self.rider_count() == 0
    }

    /// True iff any floor has at least one waiting person.
    pub fn has_demand(&self) -> bool {
        self.floors.iter().any(Floor::has_waiting)
    }
}
