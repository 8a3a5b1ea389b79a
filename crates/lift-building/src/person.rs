//! A rider and its latency timestamps.

use lift_core::{Millis, PersonId};

use crate::Direction;

/// One rider.
///
/// `picked_up_at`, once set, is never cleared.  Wait time is
/// `picked_up_at - created_at`; travel time is the drop-off timestamp minus
/// `picked_up_at` (sampled by the motion controller at drop-off, at which
/// point the `Person` value is destroyed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,

    /// 0-indexed floor this person wants to reach.
    pub destination_floor: usize,

    /// Simulated timestamp of arrival at the origin floor.
    pub created_at: Millis,

    /// Set on boarding; `None` while waiting in a floor queue.
    pub picked_up_at: Option<Millis>,
}

impl Person {
    pub fn new(id: PersonId, destination_floor: usize, created_at: Millis) -> Self {
        Self {
            id,
            destination_floor,
            created_at,
            picked_up_at: None,
        }
    }

    /// Stamp the boarding time.  Returns the wait duration in ms.
    pub fn board(&mut self, now: Millis) -> u64 {
        debug_assert!(self.picked_up_at.is_none(), "person boarded twice");
        self.picked_up_at = Some(now);
        now.since(self.created_at)
    }

    /// Travel direction required to carry this person from `from_floor`.
    /// `None` if they are already on their destination floor.
    pub fn required_direction(&self, from_floor: usize) -> Option<Direction> {
        Direction::between(from_floor, self.destination_floor)
    }
}
