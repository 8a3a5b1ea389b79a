//! `TimerQueue` — the single explicit scheduler for all deferred work.
//!
//! # Why this exists
//!
//! Every "later" in the system — an arrival firing at its scheduled offset,
//! a transit completing, a door-dwell elapsing, a busy-backoff retry — is an
//! entry here.  One queue, drained strictly in timestamp order with FIFO
//! order inside a timestamp, makes simulated time deterministic and a whole
//! run replayable from its seed.  There are no other timers anywhere.
//!
//! There is no cancel primitive.  Superseded entries (a reset while a
//! transit is in flight) are neutralized at delivery time instead: events
//! carry the generation of the instance that armed them, and the service
//! discards events whose generation no longer matches.

use std::collections::BTreeMap;

use lift_core::{ElevatorId, Millis};

// ── TimerEvent ────────────────────────────────────────────────────────────────

/// A deferred action, delivered when the clock reaches its timestamp.
///
/// `instance` fields index into the service's instance list; `generation`
/// fields are the staleness guard described in the module docs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// A scheduled workload arrival: one person appears at `origin` bound
    /// for `destination` (0-indexed), fanned out to every instance.
    Arrival { origin: usize, destination: usize },

    /// An elevator's transit duration has elapsed: land, drop off, board.
    TransitDone {
        instance: usize,
        elevator: ElevatorId,
        generation: u64,
    },

    /// The door-dwell pause after landing has elapsed: re-evaluate dispatch.
    DwellDone {
        instance: usize,
        elevator: ElevatorId,
        generation: u64,
    },

    /// Backoff expired after demand was seen while every car was mid-flight.
    RetryDispatch { instance: usize, generation: u64 },

    /// Lost-wakeup guard: re-evaluate iff the car is idle but still loaded.
    Watchdog {
        instance: usize,
        elevator: ElevatorId,
        generation: u64,
    },

    /// The arrival window is over; injection stops, draining continues.
    WindowEnd,
}

// ── TimerQueue ────────────────────────────────────────────────────────────────

/// A priority queue mapping timestamps → events armed for that instant.
#[derive(Default)]
pub struct TimerQueue {
    inner: BTreeMap<Millis, Vec<TimerEvent>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `event` to fire at `at`.  Events armed for the same timestamp
    /// fire in arming order.
    pub fn push(&mut self, at: Millis, event: TimerEvent) {
        self.inner.entry(at).or_default().push(event);
        self.total += 1;
    }

    /// Remove and return the earliest timestamp together with all of its
    /// events, or `None` when nothing is armed.
    pub fn pop_batch(&mut self) -> Option<(Millis, Vec<TimerEvent>)> {
        let (at, events) = self.inner.pop_first()?;
        self.total -= events.len();
        Some((at, events))
    }

    /// The earliest armed timestamp, or `None` when empty.
    pub fn next_time(&self) -> Option<Millis> {
        self.inner.keys().next().copied()
    }

    /// Total armed events across all timestamps.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
