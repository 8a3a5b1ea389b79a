//! One policy's simulation instance.

use lift_building::{Building, MetricsLog};
use lift_core::SimSettings;
use lift_policy::{DispatchPolicy, PolicyKind};

/// One full building + elevators + metrics world running a single dispatch
/// policy.  The service owns several of these and feeds them the same
/// arrival stream so policies can be compared head to head.
pub struct SimInstance {
    /// The decision procedure.  Boxed so instances with different policies
    /// live in one `Vec`.
    pub policy: Box<dyn DispatchPolicy>,

    /// This instance's configuration (floor count, speeds, dwell).
    pub settings: SimSettings,

    /// Floors and elevators.
    pub building: Building,

    /// Wait/travel sample logs.
    pub metrics: MetricsLog,

    /// Staleness guard for armed timers.  Bumped by [`SimInstance::reset`];
    /// a timer event whose generation doesn't match is discarded.
    pub generation: u64,

    /// Whether a `RetryDispatch` is currently armed.  At most one backoff
    /// is in flight per instance, however often dispatch finds every car
    /// busy in the meantime.
    pub retry_armed: bool,
}

impl SimInstance {
    /// A fresh instance: empty building with `settings.elevator_count` idle
    /// cars at floor 0.
    pub fn new(kind: PolicyKind, settings: SimSettings) -> Self {
        let mut building = Building::new(settings.floor_count);
        building.set_elevator_count(settings.elevator_count);
        Self {
            policy: kind.build(),
            settings,
            building,
            metrics: MetricsLog::new(),
            generation: 0,
            retry_armed: false,
        }
    }

    /// The policy name; doubles as this instance's report key.
    pub fn name(&self) -> &'static str {
        self.policy.name()
    }

    /// Re-configure and return to the initial state: empty floors, zeroed
    /// counters, empty metric logs, all cars idle at floor 0.
    ///
    /// Bumps the generation so timers armed against the old state become
    /// no-ops when they fire.
    pub fn reset(&mut self, settings: SimSettings) {
        self.settings = settings;
        self.building.reset(settings.floor_count);
        self.building.set_elevator_count(settings.elevator_count);
        self.metrics.clear();
        self.generation += 1;
        self.retry_armed = false;
    }

    /// True iff no one is waiting or riding here.
    pub fn is_empty(&self) -> bool {
        self.building.is_empty()
    }
}
