//! Elevator car state and its transit window.

use lift_core::settings::ELEVATOR_CAPACITY;
use lift_core::ElevatorId;

use crate::Person;

// ── Direction ─────────────────────────────────────────────────────────────────

/// Vertical travel direction.
///
/// An elevator remembers its last commanded direction even while idle; the
/// direction-aware policy also uses it as an alignment signal when scoring
/// pickup floors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `from` to `to`; `None` when equal.
    #[inline]
    pub fn between(from: usize, to: usize) -> Option<Direction> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Direction::Up),
            std::cmp::Ordering::Less => Some(Direction::Down),
            std::cmp::Ordering::Equal => None,
        }
    }
}

// ── Transit ───────────────────────────────────────────────────────────────────

/// An in-progress move.  Present iff the elevator is busy.
///
/// `target_floor` is authoritative for "where is this elevator ultimately
/// going" during the busy window; `start_floor` and `duration_ms` exist for
/// a presentation layer to interpolate a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transit {
    pub start_floor: usize,
    pub target_floor: usize,
    pub duration_ms: u64,
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// One elevator car.
#[derive(Debug)]
pub struct Elevator {
    pub id: ElevatorId,

    /// 0-indexed floor.  While a transit is in flight this is still the
    /// departure floor; it becomes the target on [`Elevator::complete_transit`].
    pub current_floor: usize,

    /// Last commanded travel direction.  Starts `Up`.
    pub direction: Direction,

    /// Boarded riders, in boarding order.  Never exceeds
    /// [`ELEVATOR_CAPACITY`].
    pub riders: Vec<Person>,

    /// The in-flight move, if any.  At most one at a time.
    pub transit: Option<Transit>,
}

impl Elevator {
    /// A fresh idle elevator at floor 0, direction up.
    pub fn new(id: ElevatorId) -> Self {
        Self {
            id,
            current_floor: 0,
            direction: Direction::Up,
            riders: Vec::new(),
            transit: None,
        }
    }

    /// Busy means a move is in flight; no other move may be issued.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.transit.is_some()
    }

    #[inline]
    pub fn spare_capacity(&self) -> usize {
        ELEVATOR_CAPACITY - self.riders.len()
    }

    /// Where this elevator is ultimately going: the transit target while
    /// busy, otherwise the current floor.
    #[inline]
    pub fn target_floor(&self) -> usize {
        match self.transit {
            Some(t) => t.target_floor,
            None => self.current_floor,
        }
    }

    /// The direction the majority of current riders need, relative to the
    /// current floor.  `None` when empty or tied — the undecided state in
    /// which the direction-aware policy admits anyone.
    pub fn committed_direction(&self) -> Option<Direction> {
        let mut up = 0usize;
        let mut down = 0usize;
        for person in &self.riders {
            match person.required_direction(self.current_floor) {
                Some(Direction::Up) => up += 1,
                Some(Direction::Down) => down += 1,
                None => {}
            }
        }
        match up.cmp(&down) {
            std::cmp::Ordering::Greater => Some(Direction::Up),
            std::cmp::Ordering::Less => Some(Direction::Down),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Enter the busy window for a move to `target_floor`.
    ///
    /// Records the transit and updates `direction` (unchanged for a
    /// zero-length move).  Returns the transit duration in ms.
    ///
    /// # Panics
    /// Panics in debug mode if a move is already in flight.
    pub fn begin_transit(&mut self, target_floor: usize, speed_ms_per_floor: u64) -> u64 {
        debug_assert!(self.transit.is_none(), "elevator already in transit");
        let duration_ms = speed_ms_per_floor * (self.current_floor.abs_diff(target_floor) as u64);
        if let Some(dir) = Direction::between(self.current_floor, target_floor) {
            self.direction = dir;
        }
        self.transit = Some(Transit {
            start_floor: self.current_floor,
            target_floor,
            duration_ms,
        });
        duration_ms
    }

    /// Land: clear the transit and take its target as the current floor.
    ///
    /// No-op when idle (a stale completion for a superseded transit must not
    /// corrupt state).
    pub fn complete_transit(&mut self) {
        if let Some(t) = self.transit.take() {
            self.current_floor = t.target_floor;
        }
    }

    /// Remove and return every rider bound for `floor`.
    pub fn drop_off_at(&mut self, floor: usize) -> Vec<Person> {
        let (dropped, kept) = self
            .riders
            .drain(..)
            .partition(|p| p.destination_floor == floor);
        self.riders = kept;
        dropped
    }

    /// Reset to the initial state: floor 0, idle, empty, direction up.
    pub fn reset(&mut self) {
        self.current_floor = 0;
        self.direction = Direction::Up;
        self.riders.clear();
        self.transit = None;
    }
}
