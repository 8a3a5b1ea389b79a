//! The `SimulationService`: owns every instance, the timer queue, and the
//! workload; exposes the API surface a presentation layer consumes.

use std::collections::BTreeMap;

use lift_building::Person;
use lift_core::settings::ARRIVAL_WINDOW_MS;
use lift_core::{BurstId, ElevatorId, Millis, PersonId, SimRng, SimSettings};
use lift_policy::PolicyKind;
use lift_workload::{compile_schedule, randomize_bursts, ArrivalEvent, Burst};

use crate::motion::{complete_transit, evaluate_dispatch};
use crate::{PerformanceReport, SimInstance, SimObserver, TimerEvent, TimerQueue};

/// Default burst count for [`SimulationService::randomize_bursts`].
pub const DEFAULT_BURST_COUNT: usize = 15;

// ── SimulationService ─────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Owns one or more [`SimInstance`]s (one per policy), the shared
/// [`TimerQueue`], the burst descriptor set and its compiled schedule, and
/// the master RNG.  All state is injected at construction — there are no
/// globals, so several services can coexist in one process (and in tests).
///
/// Create via [`ServiceBuilder`][crate::ServiceBuilder].
pub struct SimulationService {
    /// Current simulated time: the timestamp of the event being processed.
    clock: Millis,

    /// All deferred work, in timestamp order.
    timers: TimerQueue,

    /// One instance per policy, all fed the same arrivals.
    pub instances: Vec<SimInstance>,

    /// Global settings applied to every instance at the last `configure`.
    settings: SimSettings,

    /// The editable workload descriptor set.
    bursts: Vec<Burst>,

    /// Schedule compiled from `bursts`; `None` when a burst mutation or
    /// `configure` has invalidated it.
    schedule: Option<Vec<ArrivalEvent>>,

    /// Master RNG; schedule compilation draws from it.
    rng: SimRng,

    /// Monotonic id wells.
    next_person: u64,
    next_burst: u32,

    /// True from `start()` until the arrival window closes.
    running: bool,
}

impl SimulationService {
    /// Construct with no instances.  Prefer [`ServiceBuilder`].
    ///
    /// [`ServiceBuilder`]: crate::ServiceBuilder
    pub fn new(settings: SimSettings, seed: u64) -> Self {
        Self {
            clock: Millis::ZERO,
            timers: TimerQueue::new(),
            instances: Vec::new(),
            settings,
            bursts: Vec::new(),
            schedule: None,
            rng: SimRng::new(seed),
            next_person: 0,
            next_burst: 0,
            running: false,
        }
    }

    // ── Instance lifecycle ────────────────────────────────────────────────

    /// Add an instance running `kind`'s policy.
    ///
    /// Idempotent per policy: adding a kind whose name is already present is
    /// a no-op (live state is never reset by a repeated add).  Returns
    /// whether an instance was created.
    pub fn add_instance(&mut self, kind: PolicyKind) -> bool {
        if self.instances.iter().any(|i| i.name() == kind.name()) {
            return false;
        }
        self.instances.push(SimInstance::new(kind, self.settings));
        true
    }

    /// Apply new settings to every instance and reset them all.
    ///
    /// Values are clamped into their legal ranges.  Every instance's
    /// generation is bumped, so timers armed against the old worlds become
    /// no-ops; the compiled schedule is invalidated.
    pub fn configure(
        &mut self,
        floor_count: usize,
        elevator_count: usize,
        speed_ms_per_floor: u64,
        dwell_ms: u64,
    ) {
        self.settings =
            SimSettings::clamped(floor_count, elevator_count, speed_ms_per_floor, dwell_ms);
        for instance in &mut self.instances {
            instance.reset(self.settings);
        }
        self.schedule = None;
    }

    pub fn settings(&self) -> SimSettings {
        self.settings
    }

    // ── Arrival injection ─────────────────────────────────────────────────

    /// Inject one arrival immediately: a person at `origin` (0-indexed)
    /// bound for `destination`, fanned out to every instance whose floor
    /// range admits both floors, with dispatch re-evaluated per affected
    /// instance.  Returns the minted identity.
    pub fn add_person(&mut self, origin: usize, destination: usize) -> PersonId {
        self.inject_arrival(origin, destination, &mut crate::NoopObserver)
    }

    fn inject_arrival<O: SimObserver>(
        &mut self,
        origin: usize,
        destination: usize,
        observer: &mut O,
    ) -> PersonId {
        let id = PersonId(self.next_person);
        self.next_person += 1;

        let now = self.clock;
        for (index, instance) in self.instances.iter_mut().enumerate() {
            let person = Person::new(id, destination, now);
            if instance.building.push_waiting(origin, person) {
                evaluate_dispatch(instance, index, now, &mut self.timers, observer);
            }
        }

        observer.on_arrival(now, id, origin, destination);
        id
    }

    // ── Burst management ──────────────────────────────────────────────────

    /// Add a burst (its id is re-assigned from the service's well) and
    /// invalidate the compiled schedule.  Returns the assigned id.
    pub fn add_burst(&mut self, mut burst: Burst) -> BurstId {
        let id = BurstId(self.next_burst);
        self.next_burst += 1;
        burst.id = id;
        self.bursts.push(burst);
        self.schedule = None;
        id
    }

    /// Replace the burst with `id`, keeping the id.  Unknown ids are a
    /// no-op; returns whether a burst matched.
    pub fn update_burst(&mut self, id: BurstId, mut burst: Burst) -> bool {
        match self.bursts.iter_mut().find(|b| b.id == id) {
            Some(slot) => {
                burst.id = id;
                *slot = burst;
                self.schedule = None;
                true
            }
            None => false,
        }
    }

    /// Remove the burst with `id`.  Unknown ids are a no-op.
    pub fn remove_burst(&mut self, id: BurstId) {
        let before = self.bursts.len();
        self.bursts.retain(|b| b.id != id);
        if self.bursts.len() != before {
            self.schedule = None;
        }
    }

    /// Replace the whole descriptor set with `count` random bursts for the
    /// current floor count.
    pub fn randomize_bursts(&mut self, count: usize) {
        self.bursts = randomize_bursts(count, self.settings.floor_count, &mut self.rng);
        self.next_burst = self.bursts.len() as u32;
        self.schedule = None;
    }

    /// Replace the descriptor set with an externally loaded one (e.g. from
    /// [`lift_workload::load_bursts_csv`]).
    pub fn set_bursts(&mut self, bursts: Vec<Burst>) {
        self.next_burst = bursts.iter().map(|b| b.id.0 + 1).max().unwrap_or(0);
        self.bursts = bursts;
        self.schedule = None;
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    // ── Run control ───────────────────────────────────────────────────────

    /// Compile the schedule if stale, arm one timer per scheduled arrival
    /// (offset from the current clock) plus the window-end timer, and flip
    /// `running` on.  No-op while already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        if self.schedule.is_none() {
            self.schedule = Some(compile_schedule(&self.bursts, &mut self.rng));
        }
        // The check above guarantees the schedule is present.
        if let Some(schedule) = &self.schedule {
            for event in schedule {
                self.timers.push(
                    self.clock + event.time.0,
                    TimerEvent::Arrival {
                        origin: event.origin,
                        destination: event.destination,
                    },
                );
            }
        }
        self.timers
            .push(self.clock + ARRIVAL_WINDOW_MS, TimerEvent::WindowEnd);
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn now(&self) -> Millis {
        self.clock
    }

    /// Process the earliest timestamp batch: jump the clock to it and
    /// deliver its events in arming order.  Returns the timestamp, or
    /// `None` when nothing is armed.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Option<Millis> {
        let (at, events) = self.timers.pop_batch()?;
        self.clock = at;
        for event in events {
            self.deliver(event, observer);
        }
        Some(at)
    }

    /// Drain the timer queue.  Terminates because every armed chain shrinks
    /// the remaining work: arrivals are finite, each pickup move boards at
    /// least one waiter, and retries are only armed while transits (which
    /// always complete) are in flight.  Returns the settling time.
    pub fn run_until_settled<O: SimObserver>(&mut self, observer: &mut O) -> Millis {
        while self.step(observer).is_some() {}
        observer.on_settled(self.clock);
        self.clock
    }

    fn deliver<O: SimObserver>(&mut self, event: TimerEvent, observer: &mut O) {
        match event {
            TimerEvent::Arrival {
                origin,
                destination,
            } => {
                self.inject_arrival(origin, destination, observer);
            }

            TimerEvent::TransitDone {
                instance,
                elevator,
                generation,
            } => {
                let Some(inst) = self.accepting(instance, generation, Some(elevator)) else {
                    return;
                };
                complete_transit(
                    &mut self.instances[inst],
                    inst,
                    elevator.index(),
                    self.clock,
                    &mut self.timers,
                    observer,
                );
            }

            TimerEvent::DwellDone {
                instance,
                elevator,
                generation,
            } => {
                let Some(inst) = self.accepting(instance, generation, Some(elevator)) else {
                    return;
                };
                evaluate_dispatch(
                    &mut self.instances[inst],
                    inst,
                    self.clock,
                    &mut self.timers,
                    observer,
                );
            }

            TimerEvent::RetryDispatch {
                instance,
                generation,
            } => {
                let Some(inst) = self.accepting(instance, generation, None) else {
                    return;
                };
                self.instances[inst].retry_armed = false;
                evaluate_dispatch(
                    &mut self.instances[inst],
                    inst,
                    self.clock,
                    &mut self.timers,
                    observer,
                );
            }

            TimerEvent::Watchdog {
                instance,
                elevator,
                generation,
            } => {
                let Some(inst) = self.accepting(instance, generation, Some(elevator)) else {
                    return;
                };
                let car = &self.instances[inst].building.elevators[elevator.index()];
                // Only intervene when a loaded car sits idle — the lost
                // wake-up the watchdog exists for.
                if !car.is_busy() && !car.riders.is_empty() {
                    evaluate_dispatch(
                        &mut self.instances[inst],
                        inst,
                        self.clock,
                        &mut self.timers,
                        observer,
                    );
                }
            }

            TimerEvent::WindowEnd => {
                self.running = false;
                observer.on_window_end(self.clock);
            }
        }
    }

    /// Staleness guard: the instance index must exist, its generation must
    /// match, and (when given) the elevator index must still be in range —
    /// a shrink may have removed it after the timer was armed.
    fn accepting(
        &self,
        instance: usize,
        generation: u64,
        elevator: Option<ElevatorId>,
    ) -> Option<usize> {
        let inst = self.instances.get(instance)?;
        if inst.generation != generation {
            return None;
        }
        if let Some(car) = elevator {
            if car.index() >= inst.building.elevators.len() {
                return None;
            }
        }
        Some(instance)
    }

    // ── Reporting ─────────────────────────────────────────────────────────

    /// True iff every instance has no one waiting and no one riding.
    pub fn is_all_empty(&self) -> bool {
        self.instances.iter().all(SimInstance::is_empty)
    }

    /// Summary statistics per policy name.
    pub fn performance_report(&self) -> BTreeMap<&'static str, PerformanceReport> {
        self.instances
            .iter()
            .map(|i| (i.name(), PerformanceReport::from(&i.metrics)))
            .collect()
    }
}
