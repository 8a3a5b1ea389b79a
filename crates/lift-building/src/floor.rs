//! A floor: FIFO waiting queue plus exit counter.

use std::collections::VecDeque;

use crate::Person;

/// One floor of a building.
#[derive(Debug, Default)]
pub struct Floor {
    /// People waiting here, in arrival order.
    pub waiting: VecDeque<Person>,

    /// Count of people who have ever disembarked at this floor.
    /// Monotonically increasing.
    pub exits: u64,
}

impl Floor {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn has_waiting(&self) -> bool {
        !self.waiting.is_empty()
    }

    #[inline]
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }
}
